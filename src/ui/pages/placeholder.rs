//! Product pages that are not part of this site yet
//!
//! The routes exist so navigation links resolve; each renders a short notice.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::AppRoute;
use crate::ui::reveal::Reveal;

#[component]
fn ComingSoon(title: &'static str, #[prop(into)] description: Signal<String>) -> impl IntoView {
    view! {
        <Title text=format!("{} - thumbly", title) />
        <section class="section min-h-[60vh] flex items-center">
            <Reveal class="max-w-xl mx-auto px-4 text-center">
                <span class="pill">"Coming soon"</span>
                <h1 class="text-4xl font-bold mt-6 mb-4">{title}</h1>
                <p class="text-muted mb-8">{move || description.get()}</p>
                <A href=AppRoute::Home.path() attr:class="btn-primary">"Back to home"</A>
            </Reveal>
        </section>
    }
}

#[component]
pub fn GeneratePage() -> impl IntoView {
    view! {
        <ComingSoon
            title="Generate"
            description="The thumbnail generator is on its way."
        />
    }
}

#[component]
pub fn GenerateByIdPage() -> impl IntoView {
    let params = use_params_map();
    let description = Signal::derive(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        format!("Generation \"{}\" will open here once the generator launches.", id)
    });

    view! { <ComingSoon title="Generate" description=description /> }
}

#[component]
pub fn PreviewPage() -> impl IntoView {
    view! {
        <ComingSoon
            title="Preview"
            description="Preview your thumbnail in a realistic video feed."
        />
    }
}

#[component]
pub fn MyGenerationPage() -> impl IntoView {
    view! {
        <ComingSoon
            title="My Generations"
            description="Your saved thumbnails will be listed here."
        />
    }
}
