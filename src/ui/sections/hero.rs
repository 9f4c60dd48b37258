use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::AppRoute;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealFrom};

/// Sample thumbnails in the hero mockup: (title, gradient class)
const SAMPLE_THUMBNAILS: &[(&str, &str)] = &[
    ("I Tried 100 Days of Coding", "thumb-gradient-1"),
    ("Budget Travel Hacks 2025", "thumb-gradient-2"),
    ("Ultimate Gaming Setup Tour", "thumb-gradient-3"),
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-glow" aria-hidden="true"></div>

            <div class="max-w-6xl mx-auto px-4 text-center">
                <Reveal>
                    <span class="pill">
                        <Icon name=icons::STAR class="w-4 h-4" />
                        "Trusted by 8,432+ creators"
                    </span>
                </Reveal>

                <Reveal delay_ms=100>
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold tracking-tight mt-6 mb-6">
                        "AI thumbnails that "
                        <span class="text-gradient">"get clicks"</span>
                    </h1>
                </Reveal>

                <Reveal delay_ms=200>
                    <p class="text-xl text-muted max-w-2xl mx-auto mb-10 leading-relaxed">
                        "Create stunning, high-converting thumbnails for your videos in seconds. No design skills required."
                    </p>
                </Reveal>

                <Reveal delay_ms=300 class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href=AppRoute::Generate.path() attr:class="btn-primary btn-lg inline-flex items-center gap-2">
                        "Generate now"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </A>
                    <a href="#pricing" class="btn-ghost btn-lg">"See pricing"</a>
                </Reveal>

                <Reveal from=RevealFrom::Center delay_ms=400 class="hero-mockup">
                    {SAMPLE_THUMBNAILS.iter().map(|(title, gradient)| view! {
                        <div class=format!("thumb-card {}", gradient)>
                            <span class="thumb-title">{*title}</span>
                        </div>
                    }).collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
