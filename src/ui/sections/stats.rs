use leptos::prelude::*;

use super::SectionHeading;
use crate::core::counter::{CountUp, CountUpRun, format_count};
use crate::core::{STATS, Stat};
use crate::ui::reveal::{Reveal, stagger_delay};

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section id="stats" class="section section-tinted">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    eyebrow="Our Impact"
                    title="Trusted by creators worldwide"
                    description="Join thousands of content creators who are generating stunning thumbnails with AI."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-12">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| view! { <StatCounter stat=stat index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One figure that counts up from zero once it scrolls into view
#[component]
fn StatCounter(stat: &'static Stat, index: usize) -> impl IntoView {
    let run = StoredValue::new(CountUpRun::new(CountUp::new(stat.value)));
    let shown = RwSignal::new(0u64);
    let figure = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::core::counter::FRAME_INTERVAL_MS;
        use crate::ui::reveal::on_first_visible;
        use gloo_timers::future::TimeoutFuture;

        let Some(element) = figure.get() else {
            return;
        };
        if run.with_value(|run| run.is_started()) {
            return;
        }

        on_first_visible(&element, move || {
            let Some(true) = run.try_update_value(|run| run.start(js_sys::Date::now())) else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                loop {
                    let now = js_sys::Date::now();
                    let Some(run) = run.try_get_value() else {
                        break;
                    };
                    // Stop if the component went away mid-animation
                    if shown.try_set(run.value(now)).is_some() || run.is_finished(now) {
                        break;
                    }
                    TimeoutFuture::new(FRAME_INTERVAL_MS).await;
                }
            });
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = run;

    view! {
        <Reveal delay_ms=stagger_delay(index) class="text-center">
            <div class="stat-value" node_ref=figure>
                {move || format_count(shown.get())}
                <span class="text-accent">{stat.suffix}</span>
            </div>
            <p class="text-muted mt-2">{stat.label}</p>
        </Reveal>
    }
}
