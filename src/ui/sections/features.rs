use leptos::prelude::*;

use super::SectionHeading;
use crate::core::{FEATURES, Feature};
use crate::ui::icon::Icon;
use crate::ui::reveal::{Reveal, stagger_delay};

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    eyebrow="Features"
                    title="Everything you need to stand out"
                    description="From prompt to publish-ready thumbnail, thumbly handles the design so you can focus on content."
                />

                <div class="grid md:grid-cols-3 gap-6">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms=stagger_delay(index)>
            <div class="feature-card">
                <div class="feature-icon">
                    <Icon name=feature.icon class="w-6 h-6" />
                </div>
                <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
                <p class="text-muted leading-relaxed">{feature.description}</p>
            </div>
        </Reveal>
    }
}
