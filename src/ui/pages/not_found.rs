//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - thumbly" />
        <section class="section min-h-[60vh] flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
            <p class="text-muted mb-8 max-w-md">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <A href=AppRoute::Home.path() attr:class="btn-primary">"Go Home"</A>
                <A href=AppRoute::Generate.path() attr:class="btn-ghost">"Try the generator"</A>
            </div>
        </section>
    }
}
