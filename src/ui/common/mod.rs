//! Common UI building blocks shared by the auth screens and landing sections

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{CheckboxField, PasswordField, TextField, password_input_type};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::BaseModal;
pub use spinner::{InlineSpinner, SubmitButton};
