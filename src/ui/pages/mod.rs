//! Application pages module
//!
//! One component per route:
//! - Home (landing sections)
//! - Login, Signup, Forgot password
//! - Generate, Preview, My generations (placeholders)
//! - Not found

mod forgot_password;
mod home;
mod login;
mod not_found;
mod placeholder;
mod signup;

pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use placeholder::{GenerateByIdPage, GeneratePage, MyGenerationPage, PreviewPage};
pub use signup::SignupPage;
