//! Login page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::{AuthLayout, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Log in - thumbly" />
        <AuthLayout
            title="Welcome back"
            subtitle="Sign in to keep creating thumbnails"
        >
            <LoginForm />
        </AuthLayout>
    }
}
