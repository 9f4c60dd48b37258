//! Authentication screens
//!
//! The forms validate locally, wait for a simulated request and log the
//! outcome. No credentials leave the browser.

mod forgot_password_form;
mod layout;
mod login_form;
mod signup_form;
mod social;

pub use forgot_password_form::{ForgotPasswordForm, step_copy};
pub use layout::AuthLayout;
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
pub use social::SocialButtons;
