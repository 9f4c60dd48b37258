use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealFrom};

/// Full-screen frame shared by the login, signup and forgot-password screens.
///
/// These routes render without the navbar and footer, so the layout carries
/// its own way back home.
#[component]
pub fn AuthLayout(
    /// Card heading
    #[prop(into)]
    title: Signal<String>,
    /// Line under the heading
    #[prop(into)]
    subtitle: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-screen">
            <div class="auth-glow" aria-hidden="true"></div>

            <A href=AppRoute::Home.path() attr:class="auth-back">
                <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                <span>"Back to home"</span>
            </A>

            <main class="w-full max-w-md">
                <Reveal from=RevealFrom::Center>
                    <div class="auth-card">
                        <div class="text-center mb-8">
                            <A href=AppRoute::Home.path() attr:class="inline-flex items-center gap-2 mb-6">
                                <Icon name=icons::LOGO class="w-9 h-9" />
                                <span class="text-2xl font-bold">"thumbly"</span>
                            </A>
                            <h1 class="text-2xl font-bold">{move || title.get()}</h1>
                            <p class="mt-2 text-sm text-muted">{move || subtitle.get()}</p>
                        </div>
                        {children()}
                    </div>
                </Reveal>
            </main>
        </div>
    }
}
