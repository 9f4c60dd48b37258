//! Signup form component

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::LegalDoc;
use crate::core::routes::AppRoute;
use crate::core::validation::SignupForm as SignupFields;
use crate::ui::auth::SocialButtons;
use crate::ui::common::{
    CheckboxField, ErrorMessage, PasswordField, SubmitButton, SuccessMessage, TextField,
};
use crate::ui::delay::{SIGNUP_DELAY_MS, after_latency};
use crate::ui::icon::icons;
use crate::ui::legal::LegalLink;

/// Account creation form. Registration is simulated.
#[component]
pub fn SignupForm() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
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

        let fields = SignupFields {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        };
        let input = match fields.validate() {
            Ok(input) => input,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        loading.set(true);
        let navigate = navigate.clone();
        after_latency(SIGNUP_DELAY_MS, move || {
            log!("signup submitted: name={} email={}", input.name, input.email);
            loading.set(false);
            success.set(Some("Account created! Redirecting to sign in...".to_string()));
            navigate(&AppRoute::Login.path(), Default::default());
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate=true>
            <ErrorMessage error=error />
            <SuccessMessage message=success />

            <TextField
                id="name"
                label="Full name"
                placeholder="Jane Doe"
                autocomplete="name"
                icon=icons::USER
                value=name
                disabled=loading
            />

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

            <PasswordField
                id="password"
                label="Password"
                placeholder="Create a password"
                autocomplete="new-password"
                value=password
                disabled=loading
            />

            <PasswordField
                id="confirm-password"
                label="Confirm password"
                placeholder="Repeat your password"
                autocomplete="new-password"
                value=confirm_password
                disabled=loading
            />

            <CheckboxField id="terms" checked=accepted_terms>
                "I agree to the "
                <LegalLink doc=LegalDoc::Terms />
                " and "
                <LegalLink doc=LegalDoc::Privacy />
            </CheckboxField>

            <SubmitButton loading=loading text="Create Account" loading_text="Creating account..." />

            <SocialButtons caption="Or sign up with" />

            <p class="text-center text-sm text-muted">
                "Already have an account? "
                <A href=AppRoute::Login.path() attr:class="link-accent font-medium">"Sign in"</A>
            </p>
        </form>
    }
}
