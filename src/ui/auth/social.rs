//! Third-party sign-in buttons
//!
//! No OAuth provider is wired up. The buttons render and do nothing.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Providers offered under the auth forms: (icon, label)
pub const SOCIAL_PROVIDERS: &[(&str, &str)] =
    &[(icons::GOOGLE, "Google"), (icons::GITHUB, "GitHub")];

#[component]
pub fn SocialButtons(
    /// Divider text above the buttons
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-5">
            <div class="relative">
                <div class="absolute inset-0 flex items-center" aria-hidden="true">
                    <div class="w-full divider-top"></div>
                </div>
                <div class="relative flex justify-center text-sm">
                    <span class="px-2 bg-surface text-muted">{caption}</span>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                {SOCIAL_PROVIDERS
                    .iter()
                    .map(|(icon, label)| view! {
                        <button
                            type="button"
                            class="btn-social"
                            title=format!("{} sign-in is not available yet", label)
                        >
                            <Icon name=*icon class="w-5 h-5" />
                            {*label}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_providers() {
        let labels: Vec<_> = SOCIAL_PROVIDERS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, vec!["Google", "GitHub"]);
        assert!(SOCIAL_PROVIDERS.iter().all(|(icon, _)| !icon.is_empty()));
    }
}
