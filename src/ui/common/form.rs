use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// `type` attribute for a password input given its visibility
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Labeled text input bound to a signal
#[component]
pub fn TextField(
    /// Input id, also used for the label's `for`
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Optional leading icon
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Bound value
    value: RwSignal<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">{label}</label>
            <div class="relative">
                {icon.map(|name| view! {
                    <span class="input-icon">
                        <Icon name=name class="w-4 h-4" />
                    </span>
                })}
                <input
                    id=id
                    name=id
                    type=input_type
                    class="input-base"
                    class:pl-10=icon.is_some()
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
            </div>
        </div>
    }
}

/// Password input with a show/hide toggle.
///
/// Toggling only changes the input `type`; the bound value is untouched.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "Enter your password")]
    placeholder: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    value: RwSignal<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">{label}</label>
            <div class="relative">
                <span class="input-icon">
                    <Icon name=icons::LOCK class="w-4 h-4" />
                </span>
                <input
                    id=id
                    name=id
                    type=move || password_input_type(visible.get())
                    class="input-base pl-10 pr-10"
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                <button
                    type="button"
                    class="input-toggle"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="w-4 h-4" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="w-4 h-4" /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Checkbox with a label that may contain links
#[component]
pub fn CheckboxField(
    id: &'static str,
    /// Current checked state
    checked: RwSignal<bool>,
    /// Label content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <input
                id=id
                type="checkbox"
                class="mt-1 w-4 h-4 rounded accent-brand"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <label for=id class="text-sm text-muted">{children()}</label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }

    #[test]
    fn test_toggling_visibility_keeps_value() {
        let owner = Owner::new();
        owner.with(|| {
            let value = RwSignal::new("s3cret!".to_string());
            let visible = RwSignal::new(false);

            assert_eq!(password_input_type(visible.get_untracked()), "password");
            visible.update(|v| *v = !*v);
            assert_eq!(password_input_type(visible.get_untracked()), "text");
            visible.update(|v| *v = !*v);

            assert_eq!(value.get_untracked(), "s3cret!");
        });
    }
}
