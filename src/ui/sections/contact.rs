use leptos::logging::log;
use leptos::prelude::*;

use super::SectionHeading;
use crate::core::validation::ContactForm;
use crate::ui::common::{ErrorMessage, SubmitButton, SuccessMessage, TextField};
use crate::ui::delay::{CONTACT_DELAY_MS, after_latency};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, RevealFrom};

/// Ways to reach the team: (icon, label, value)
const CONTACT_CHANNELS: &[(&str, &str, &str)] = &[
    (icons::MAIL, "Email", "hello@thumbly.com"),
    (icons::SEND, "Support", "support@thumbly.com"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        sent.set(None);

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = form.validate() {
            error.set(Some(err.to_string()));
            return;
        }

        loading.set(true);
        after_latency(CONTACT_DELAY_MS, move || {
            log!(
                "contact message from {} <{}>: {} chars",
                form.name.trim(),
                form.email.trim(),
                form.message.len()
            );
            loading.set(false);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            sent.set(Some("Thanks! We'll get back to you soon.".to_string()));
        });
    };

    view! {
        <section id="contact" class="section section-tinted">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    eyebrow="Contact"
                    title="Get in touch"
                    description="Questions about plans, teams or the API? Send us a message."
                />

                <div class="grid md:grid-cols-5 gap-10">
                    <Reveal from=RevealFrom::Left class="md:col-span-2 space-y-6">
                        {CONTACT_CHANNELS.iter().map(|(icon, label, value)| view! {
                            <div class="flex items-center gap-4">
                                <div class="feature-icon">
                                    <Icon name=*icon class="w-5 h-5" />
                                </div>
                                <div>
                                    <p class="text-sm text-muted">{*label}</p>
                                    <p class="font-medium">{*value}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </Reveal>

                    <Reveal from=RevealFrom::Right class="md:col-span-3">
                        <form on:submit=on_submit class="contact-card space-y-5" novalidate=true>
                            <ErrorMessage error=error />
                            <SuccessMessage message=sent />

                            <div class="grid sm:grid-cols-2 gap-4">
                                <TextField
                                    id="contact-name"
                                    label="Name"
                                    placeholder="Your name"
                                    autocomplete="name"
                                    value=name
                                    disabled=loading
                                />
                                <TextField
                                    id="contact-email"
                                    label="Email"
                                    input_type="email"
                                    placeholder="you@example.com"
                                    autocomplete="email"
                                    value=email
                                    disabled=loading
                                />
                            </div>

                            <div class="space-y-1.5">
                                <label for="contact-message" class="label">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows=5
                                    class="input-base resize-none"
                                    placeholder="How can we help?"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                    disabled=move || loading.get()
                                ></textarea>
                            </div>

                            <SubmitButton loading=loading text="Send Message" loading_text="Sending..." />
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
