//! Landing page sections, rendered in order by `HomePage`

mod contact;
mod cta;
mod features;
mod hero;
mod pricing;
mod stats;

pub use contact::ContactSection;
pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
pub use pricing::PricingSection;
pub use stats::StatsSection;

use leptos::prelude::*;

use crate::ui::reveal::Reveal;

/// Centered eyebrow + heading + blurb used at the top of each section
#[component]
fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <span class="eyebrow">{eyebrow}</span>
            <h2 class="text-3xl sm:text-4xl font-bold mt-3 mb-4">{title}</h2>
            <p class="text-lg text-muted max-w-2xl mx-auto">{description}</p>
        </Reveal>
    }
}
