use leptos::prelude::*;
use leptos_router::components::A;

use super::SectionHeading;
use crate::core::{AppRoute, PRICING_PLANS, PricingPlan};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, stagger_delay};

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="section">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    eyebrow="Pricing"
                    title="Simple, transparent pricing"
                    description="Choose the plan that fits your channel. Upgrade or cancel any time."
                />

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto items-center">
                    {PRICING_PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PricingCard plan=plan index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static PricingPlan, index: usize) -> impl IntoView {
    let card_class = if plan.most_popular {
        "pricing-card pricing-card-popular"
    } else {
        "pricing-card"
    };
    let cta_class = if plan.most_popular {
        "btn-primary w-full text-center block"
    } else {
        "btn-ghost w-full text-center block"
    };

    view! {
        <Reveal delay_ms=stagger_delay(index)>
            <div class=card_class>
                {plan.most_popular.then(|| view! {
                    <div class="popular-badge">"Most Popular"</div>
                })}

                <h3 class="text-xl font-semibold mb-2">{plan.name}</h3>
                <div class="flex items-baseline gap-1 mb-6">
                    <span class="text-4xl font-bold">{plan.price_label()}</span>
                    <span class="text-muted">{plan.period_label()}</span>
                </div>

                <ul class="space-y-3 mb-8">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-center gap-3">
                            <Icon name=icons::CHECK class="w-5 h-5 flex-shrink-0" />
                            <span>{*feature}</span>
                        </li>
                    }).collect_view()}
                </ul>

                <A href=AppRoute::Signup.path() attr:class=cta_class>"Get Started"</A>
            </div>
        </Reveal>
    }
}
