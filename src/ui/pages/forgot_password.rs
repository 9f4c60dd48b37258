//! Forgot-password page
//!
//! The layout heading follows the form's current step.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::Step;
use crate::ui::auth::{AuthLayout, ForgotPasswordForm, step_copy};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let step = RwSignal::new(Step::Email);

    view! {
        <Title text="Reset password - thumbly" />
        <AuthLayout
            title=Signal::derive(move || step_copy(step.get()).0.to_string())
            subtitle=Signal::derive(move || step_copy(step.get()).1.to_string())
        >
            <ForgotPasswordForm on_step_change=Callback::new(move |s| step.set(s)) />
        </AuthLayout>
    }
}
