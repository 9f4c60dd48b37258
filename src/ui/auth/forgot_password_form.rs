//! Forgot-password form: email, then code, then done
//!
//! Drives a [`OtpFlow`]. The code is only logged to the browser console; there
//! is no mail delivery and no real password reset behind this screen.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use rand::rngs::SmallRng;

use crate::core::otp::{OtpFlow, Step, placeholder_rng};
use crate::core::routes::AppRoute;
use crate::core::validation::{FormError, OTP_LENGTH, sanitize_code_input, validate_email};
use crate::ui::common::{ErrorMessage, SubmitButton, SuccessMessage, TextField};
use crate::ui::delay::{
    RESEND_CODE_DELAY_MS, SEND_CODE_DELAY_MS, VERIFY_CODE_DELAY_MS, after_latency,
};
use crate::ui::icon::{Icon, icons};

/// Heading and subheading for each step
pub fn step_copy(step: Step) -> (&'static str, &'static str) {
    match step {
        Step::Email => (
            "Reset Password",
            "Enter your email to receive a verification code",
        ),
        Step::Otp => ("Verify OTP", "Enter the 6-digit code sent to your email"),
        Step::Success => ("Password Sent!", "Check your email for your new password"),
    }
}

/// Code to show in the on-page placeholder panel.
///
/// Nothing is mailed, so the held code is displayed while the form waits for
/// it. Only shown on the `Otp` step.
pub fn placeholder_code_hint(flow: &OtpFlow) -> Option<&str> {
    match flow.step() {
        Step::Otp => flow.code(),
        Step::Email | Step::Success => None,
    }
}

/// Run `f` against the flow and the shared RNG in one update
fn with_flow<T>(
    flow: RwSignal<OtpFlow>,
    rng: StoredValue<SmallRng>,
    f: impl FnOnce(&mut OtpFlow, &mut SmallRng) -> T,
) -> Option<T> {
    let mut out = None;
    flow.update(|flow| {
        rng.update_value(|rng| out = Some(f(flow, rng)));
    });
    out
}

#[component]
pub fn ForgotPasswordForm(
    /// Receives the current step so the surrounding layout can retitle itself
    #[prop(optional, into)]
    on_step_change: Option<Callback<Step>>,
) -> impl IntoView {
    let flow = RwSignal::new(OtpFlow::new());
    let rng = StoredValue::new(placeholder_rng());

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let step = Memo::new(move |_| flow.with(|f| f.step()));

    Effect::new(move |_| {
        let current = step.get();
        if let Some(callback) = on_step_change {
            callback.run(current);
        }
    });

    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        notice.set(None);

        let address = match validate_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        loading.set(true);
        after_latency(SEND_CODE_DELAY_MS, move || {
            loading.set(false);
            match with_flow(flow, rng, |flow, rng| flow.submit_email(&address, rng)) {
                Some(Ok(sent)) => {
                    log!("verification code for {}: {}", address, sent);
                    code.set(String::new());
                }
                Some(Err(err)) => error.set(Some(err.to_string())),
                None => {}
            }
        });
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        notice.set(None);

        let entered = code.get_untracked();
        loading.set(true);
        after_latency(VERIFY_CODE_DELAY_MS, move || {
            loading.set(false);
            let mut outcome = Err(FormError::NoPendingCode);
            flow.update(|flow| outcome = flow.verify(&entered));
            match outcome {
                Ok(()) => log!("verification code accepted"),
                Err(err) => {
                    log!("verification failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let on_resend = move |_: leptos::ev::MouseEvent| {
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        loading.set(true);
        after_latency(RESEND_CODE_DELAY_MS, move || {
            loading.set(false);
            match with_flow(flow, rng, |flow, rng| flow.resend(rng)) {
                Some(Ok(sent)) => {
                    log!("resent verification code: {}", sent);
                    code.set(String::new());
                    notice.set(Some("A new code has been sent.".to_string()));
                }
                Some(Err(err)) => error.set(Some(err.to_string())),
                None => {}
            }
        });
    };

    let on_change_email = move |_: leptos::ev::MouseEvent| {
        // A pending verify or resend would land on the reset flow
        if loading.get_untracked() {
            return;
        }
        flow.update(|f| f.reset());
        code.set(String::new());
        error.set(None);
        notice.set(None);
    };

    let sent_to = move || flow.with(|f| f.email().unwrap_or_default().to_string());
    let code_hint = move || flow.with(|f| placeholder_code_hint(f).map(str::to_string));

    view! {
        <div class="space-y-5">
            <ErrorMessage error=error />
            <SuccessMessage message=notice />

            {move || match step.get() {
                Step::Email => view! {
                    <form on:submit=on_send_code class="space-y-5" novalidate=true>
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
                        <SubmitButton loading=loading text="Send Code" loading_text="Sending code..." />
                    </form>
                }.into_any(),

                Step::Otp => view! {
                    <form on:submit=on_verify class="space-y-5" novalidate=true>
                        <p class="text-sm text-muted text-center">
                            "Code sent to "
                            <span class="font-medium text-primary">{sent_to}</span>
                        </p>
                        <div class="space-y-1.5">
                            <label for="otp" class="label">"Verification code"</label>
                            <input
                                id="otp"
                                name="otp"
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength=OTP_LENGTH.to_string()
                                placeholder="000000"
                                class="input-base otp-input"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(sanitize_code_input(&event_target_value(&ev)))
                                disabled=move || loading.get()
                            />
                        </div>
                        <SubmitButton loading=loading text="Verify Code" loading_text="Verifying..." />
                        <div class="flex items-center justify-between text-sm">
                            <button
                                type="button"
                                class="link-accent"
                                on:click=on_change_email
                                disabled=move || loading.get()
                            >
                                "Use a different email"
                            </button>
                            <button
                                type="button"
                                class="link-accent"
                                on:click=on_resend
                                disabled=move || loading.get()
                            >
                                "Didn't receive code? Resend"
                            </button>
                        </div>
                    </form>
                }.into_any(),

                Step::Success => view! {
                    <div class="text-center space-y-6">
                        <div class="success-badge">
                            <Icon name=icons::CHECK class="w-8 h-8" />
                        </div>
                        <div class="space-y-2">
                            <h3 class="text-xl font-semibold">"Password Reset Successful!"</h3>
                            <p class="text-muted">"A new temporary password has been sent to"</p>
                            <p class="text-accent font-medium">{sent_to}</p>
                        </div>
                        <div class="info-message">
                            "Please check your email and use the temporary password to log in. "
                            "We recommend changing it after logging in."
                        </div>
                        <A href=AppRoute::Login.path() attr:class="btn-primary w-full inline-block">
                            "Go to Login"
                        </A>
                    </div>
                }.into_any(),
            }}

            <Show when=move || step.get() != Step::Success>
                <p class="text-center text-sm">
                    <A href=AppRoute::Login.path() attr:class="footer-link">"Back to login"</A>
                </p>
            </Show>

            {move || code_hint().map(|code| view! {
                <div class="dev-panel" role="note">
                    <strong>"Development Mode:"</strong>
                    " no email is sent yet. OTP is "
                    <span class="font-mono text-lg">{code}</span>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_step_copy_differs_per_step() {
        let titles = [Step::Email, Step::Otp, Step::Success].map(|s| step_copy(s).0);
        assert_eq!(titles, ["Reset Password", "Verify OTP", "Password Sent!"]);
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
    }

    #[test]
    fn test_code_hint_only_while_waiting_for_code() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut flow = OtpFlow::new();
        assert_eq!(placeholder_code_hint(&flow), None);

        let sent = flow.submit_email("creator@example.com", &mut rng).unwrap();
        assert_eq!(placeholder_code_hint(&flow), Some(sent.as_str()));

        let resent = flow.resend(&mut rng).unwrap();
        assert_eq!(placeholder_code_hint(&flow), Some(resent.as_str()));

        flow.verify(&resent).unwrap();
        assert_eq!(placeholder_code_hint(&flow), None);
        // Success view still knows where the password went
        assert_eq!(flow.email(), Some("creator@example.com"));
    }

    #[test]
    fn test_changing_email_drops_pending_code() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut flow = OtpFlow::new();
        let sent = flow.submit_email("first@example.com", &mut rng).unwrap();
        flow.reset();
        assert_eq!(flow.step(), Step::Email);
        assert_eq!(placeholder_code_hint(&flow), None);
        assert_eq!(flow.verify(&sent), Err(FormError::NoPendingCode));
    }

    #[test]
    fn test_resend_is_quicker_than_verify() {
        assert_eq!(VERIFY_CODE_DELAY_MS, 1_500);
        assert_eq!(RESEND_CODE_DELAY_MS, 1_000);
        assert_eq!(SEND_CODE_DELAY_MS, 1_500);
    }

    #[test]
    fn test_with_flow_drives_state_machine() {
        let owner = Owner::new();
        owner.with(|| {
            let flow = RwSignal::new(OtpFlow::new());
            let rng = StoredValue::new(SmallRng::seed_from_u64(3));

            let sent = with_flow(flow, rng, |f, r| f.submit_email("a@b.com", r))
                .unwrap()
                .unwrap();
            assert_eq!(flow.with_untracked(|f| f.step()), Step::Otp);

            let resent = with_flow(flow, rng, |f, r| f.resend(r)).unwrap().unwrap();
            assert_ne!(sent, resent);

            flow.update(|f| {
                assert_eq!(f.verify(&sent), Err(FormError::CodeMismatch));
                assert!(f.verify(&resent).is_ok());
            });
            assert_eq!(flow.with_untracked(|f| f.step()), Step::Success);
        });
    }
}
