//! Client-side form validation
//!
//! Validators return `Result<_, FormError>`; the error's `Display` text is the
//! message shown next to the form.

use thiserror::Error;

/// Number of digits in a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// A validation failure on one of the site's forms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must accept the Terms of Service and Privacy Policy")]
    TermsNotAccepted,

    #[error("Please enter the 6-digit code")]
    MalformedCode,

    #[error("Invalid code. Please try again.")]
    CodeMismatch,

    #[error("No verification code is pending")]
    NoPendingCode,
}

/// Validate an email address and return it trimmed
pub fn validate_email(email: &str) -> Result<String, FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::Required("Email"));
    }

    let (local, domain) = email.split_once('@').ok_or(FormError::InvalidEmail)?;
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));

    if local.is_empty() || domain.contains('@') || !domain_ok || email.contains(char::is_whitespace)
    {
        return Err(FormError::InvalidEmail);
    }

    Ok(email.to_string())
}

/// Require a non-blank value for the named field
pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

/// Validated login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginInput, FormError> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(FormError::Required("Password"));
    }
    Ok(LoginInput {
        email,
        password: password.to_string(),
    })
}

/// Raw signup form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

/// Validated signup submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupInput, FormError> {
        require("Name", &self.name)?;
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accepted_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(SignupInput {
            name: self.name.trim().to_string(),
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        require("Message", &self.message)
    }
}

/// Check that a code is exactly six ASCII digits and return it trimmed
pub fn validate_code(code: &str) -> Result<&str, FormError> {
    let code = code.trim();
    if code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(FormError::MalformedCode)
    }
}

/// Keep only digits and cap the length, for the code input's `on:input`
pub fn sanitize_code_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_valid_emails() {
        assert_eq!(
            validate_email("  user@example.com "),
            Ok("user@example.com".to_string())
        );
        assert!(validate_email("first.last@sub.domain.io").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(FormError::Required("Email")));
        assert_eq!(validate_email("   "), Err(FormError::Required("Email")));
        assert_eq!(validate_email("plainaddress"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("user@"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("user@localhost"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("user@.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("us er@example.com"), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_login_requires_password() {
        assert_eq!(
            validate_login("a@b.com", ""),
            Err(FormError::Required("Password"))
        );
        let input = validate_login(" a@b.com ", "secret").unwrap();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.password, "secret");
    }

    #[test]
    fn test_signup_valid() {
        let input = signup().validate().unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
    }

    #[test]
    fn test_signup_requires_name() {
        let form = SignupForm {
            name: "  ".to_string(),
            ..signup()
        };
        assert_eq!(form.validate(), Err(FormError::Required("Name")));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let form = SignupForm {
            confirm_password: "hunter23".to_string(),
            ..signup()
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_signup_requires_terms() {
        let form = SignupForm {
            accepted_terms: false,
            ..signup()
        };
        assert_eq!(form.validate(), Err(FormError::TermsNotAccepted));
    }

    #[test]
    fn test_contact_form() {
        let mut form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::Required("Message")));
        form.message = "Hi!".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_code() {
        assert_eq!(validate_code(" 123456 "), Ok("123456"));
        assert_eq!(validate_code("12345"), Err(FormError::MalformedCode));
        assert_eq!(validate_code("1234567"), Err(FormError::MalformedCode));
        assert_eq!(validate_code("12a456"), Err(FormError::MalformedCode));
    }

    #[test]
    fn test_sanitize_code_input() {
        assert_eq!(sanitize_code_input("12-34 56"), "123456");
        assert_eq!(sanitize_code_input("123456789"), "123456");
        assert_eq!(sanitize_code_input("abc"), "");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Required("Email").to_string(), "Email is required");
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
