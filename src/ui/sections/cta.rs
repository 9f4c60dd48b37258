use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;
use crate::ui::reveal::{Reveal, RevealFrom};

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="section">
            <div class="max-w-4xl mx-auto px-4">
                <Reveal from=RevealFrom::Center>
                    <div class="cta-card text-center">
                        <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                            "Ready to boost your click-through rate?"
                        </h2>
                        <p class="text-lg text-muted mb-8 max-w-xl mx-auto">
                            "Join thousands of creators designing thumbnails with thumbly. Start free, no credit card required."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                            <A href=AppRoute::Signup.path() attr:class="btn-primary btn-lg">"Get Started Free"</A>
                            <A href=AppRoute::Generate.path() attr:class="btn-ghost btn-lg">"Try the generator"</A>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
