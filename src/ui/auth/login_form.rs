//! Login form component

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::routes::AppRoute;
use crate::core::validation::validate_login;
use crate::ui::auth::SocialButtons;
use crate::ui::common::{ErrorMessage, PasswordField, SubmitButton, SuccessMessage, TextField};
use crate::ui::delay::{LOGIN_DELAY_MS, after_latency};
use crate::ui::icon::icons;

/// Email + password login. Sign-in is simulated.
#[component]
pub fn LoginForm() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);

        let input = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        loading.set(true);
        let remember = remember.get_untracked();
        let navigate = navigate.clone();
        after_latency(LOGIN_DELAY_MS, move || {
            log!("login submitted: email={} remember={}", input.email, remember);
            loading.set(false);
            success.set(Some("Signed in. Redirecting...".to_string()));
            navigate(&AppRoute::Home.path(), Default::default());
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate=true>
            <ErrorMessage error=error />
            <SuccessMessage message=success />

            <TextField
                id="email"
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                icon=icons::MAIL
                value=email
                disabled=loading
            />

            <PasswordField id="password" label="Password" value=password disabled=loading />

            <div class="flex items-center justify-between text-sm">
                <label class="flex items-center gap-2 text-muted cursor-pointer">
                    <input
                        type="checkbox"
                        class="w-4 h-4 rounded accent-brand"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <A href=AppRoute::ForgotPassword.path() attr:class="link-accent">"Forgot password?"</A>
            </div>

            <SubmitButton loading=loading text="Sign In" loading_text="Signing in..." />

            <SocialButtons caption="Or continue with" />

            <p class="text-center text-sm text-muted">
                "Don't have an account? "
                <A href=AppRoute::Signup.path() attr:class="link-accent font-medium">"Sign up"</A>
            </p>
        </form>
    }
}
