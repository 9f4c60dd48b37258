//! Landing page
//!
//! Composes the marketing sections in fixed order: hero, features, stats,
//! pricing, contact, call to action.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::sections::{
    ContactSection, CtaSection, FeaturesSection, HeroSection, PricingSection, StatsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="thumbly - AI Thumbnail Generator" />
        <Meta
            name="description"
            content="Create eye-catching, high-converting video thumbnails in seconds with AI."
        />
        <Meta property="og:title" content="thumbly - AI Thumbnail Generator" />
        <Meta property="og:type" content="website" />

        <HeroSection />
        <FeaturesSection />
        <StatsSection />
        <PricingSection />
        <ContactSection />
        <CtaSection />
    }
}
