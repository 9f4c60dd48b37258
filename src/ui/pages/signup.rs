//! Signup page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::{AuthLayout, SignupForm};

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign up - thumbly" />
        <AuthLayout
            title="Create your account"
            subtitle="Start generating thumbnails in minutes"
        >
            <SignupForm />
        </AuthLayout>
    }
}
