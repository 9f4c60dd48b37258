use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Small spinning loader for buttons
#[component]
pub fn InlineSpinner(#[prop(default = "w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <span class="inline-flex animate-spin">
            <Icon name=icons::LOADER class=class />
        </span>
    }
}

/// Full-width form submit button that shows a spinner while `loading`
#[component]
pub fn SubmitButton(
    /// Whether the simulated request is running
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text while loading
    #[prop(default = "Loading...")]
    loading_text: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn-primary w-full"
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <InlineSpinner />
                    <span>{loading_text}</span>
                </span>
            </Show>
        </button>
    }
}
