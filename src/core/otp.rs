//! Forgot-password step flow
//!
//! This is a UI placeholder for a password-reset backend that does not exist
//! yet. The code is generated locally from a non-cryptographic PRNG, never
//! delivered anywhere, and checked with plain string equality. It has no
//! expiry and no attempt limit. Do not treat it as authentication.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::validation::{FormError, OTP_LENGTH, validate_code, validate_email};

/// Steps of the forgot-password screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Email,
    Otp,
    Success,
}

/// Generate a zero-padded six-digit code
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let code: u32 = rng.gen_range(0..1_000_000);
    format!("{:0width$}", code, width = OTP_LENGTH)
}

/// State of one forgot-password session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpFlow {
    step: Step,
    email: Option<String>,
    code: Option<String>,
}

impl OtpFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The currently held code, if one has been generated
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Accept an email, generate a code and move to the `Otp` step.
    ///
    /// Returns the generated code so the caller can "send" it.
    pub fn submit_email<R: Rng + ?Sized>(
        &mut self,
        email: &str,
        rng: &mut R,
    ) -> Result<String, FormError> {
        let email = validate_email(email)?;
        let code = generate_code(rng);
        self.email = Some(email);
        self.code = Some(code.clone());
        self.step = Step::Otp;
        Ok(code)
    }

    /// Compare `input` with the held code and move to `Success` on a match.
    ///
    /// On any failure the step is left unchanged.
    pub fn verify(&mut self, input: &str) -> Result<(), FormError> {
        if self.step != Step::Otp {
            return Err(FormError::NoPendingCode);
        }
        let input = validate_code(input)?;
        match self.code.as_deref() {
            Some(code) if code == input => {
                self.step = Step::Success;
                Ok(())
            }
            Some(_) => Err(FormError::CodeMismatch),
            None => Err(FormError::NoPendingCode),
        }
    }

    /// Replace the held code with a fresh one. The step does not change.
    ///
    /// The new code never equals the previous one.
    pub fn resend<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, FormError> {
        if self.step != Step::Otp {
            return Err(FormError::NoPendingCode);
        }
        let mut code = generate_code(rng);
        while self.code.as_deref() == Some(code.as_str()) {
            code = generate_code(rng);
        }
        self.code = Some(code.clone());
        Ok(code)
    }

    /// Drop the email and code and go back to the first step
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A small PRNG seeded from the clock, good enough for placeholder codes
pub fn placeholder_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy_seed())
}

#[cfg(feature = "hydrate")]
fn entropy_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 32)
}

#[cfg(not(feature = "hydrate"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn flow_at_otp(rng: &mut SmallRng) -> (OtpFlow, String) {
        let mut flow = OtpFlow::new();
        let code = flow.submit_email("user@example.com", rng).unwrap();
        (flow, code)
    }

    #[test]
    fn test_generated_codes_are_six_digits() {
        let mut rng = rng();
        for _ in 0..200 {
            let code = generate_code(&mut rng);
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_starts_at_email_step() {
        let flow = OtpFlow::new();
        assert_eq!(flow.step(), Step::Email);
        assert!(flow.code().is_none());
        assert!(flow.email().is_none());
    }

    #[test]
    fn test_valid_email_moves_to_otp() {
        let mut rng = rng();
        let (flow, code) = flow_at_otp(&mut rng);
        assert_eq!(flow.step(), Step::Otp);
        assert_eq!(flow.code(), Some(code.as_str()));
        assert_eq!(flow.email(), Some("user@example.com"));
    }

    #[test]
    fn test_invalid_email_stays_at_email() {
        let mut rng = rng();
        let mut flow = OtpFlow::new();
        assert_eq!(
            flow.submit_email("not-an-email", &mut rng),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(flow.step(), Step::Email);
        assert!(flow.code().is_none());
    }

    #[test]
    fn test_matching_code_succeeds() {
        let mut rng = rng();
        let (mut flow, code) = flow_at_otp(&mut rng);
        assert!(flow.verify(&code).is_ok());
        assert_eq!(flow.step(), Step::Success);
    }

    #[test]
    fn test_wrong_code_stays_at_otp() {
        let mut rng = rng();
        let (mut flow, code) = flow_at_otp(&mut rng);
        let wrong = if code == "000000" { "111111" } else { "000000" };
        assert_eq!(flow.verify(wrong), Err(FormError::CodeMismatch));
        assert_eq!(flow.step(), Step::Otp);

        // A later correct attempt still works
        assert!(flow.verify(&code).is_ok());
    }

    #[test]
    fn test_malformed_code_is_rejected() {
        let mut rng = rng();
        let (mut flow, _) = flow_at_otp(&mut rng);
        assert_eq!(flow.verify("12345"), Err(FormError::MalformedCode));
        assert_eq!(flow.verify("abcdef"), Err(FormError::MalformedCode));
        assert_eq!(flow.step(), Step::Otp);
    }

    #[test]
    fn test_verify_outside_otp_step() {
        let mut flow = OtpFlow::new();
        assert_eq!(flow.verify("123456"), Err(FormError::NoPendingCode));
        assert_eq!(flow.step(), Step::Email);
    }

    #[test]
    fn test_resend_invalidates_previous_code() {
        let mut rng = rng();
        let (mut flow, old) = flow_at_otp(&mut rng);
        for _ in 0..50 {
            let previous = flow.code().unwrap().to_string();
            let new = flow.resend(&mut rng).unwrap();
            assert_ne!(new, previous);
            assert_eq!(flow.step(), Step::Otp);
        }
        let current = flow.code().unwrap().to_string();
        if current != old {
            assert_eq!(flow.verify(&old), Err(FormError::CodeMismatch));
        }
        assert!(flow.verify(&current).is_ok());
    }

    #[test]
    fn test_resend_requires_otp_step() {
        let mut rng = rng();
        let mut flow = OtpFlow::new();
        assert_eq!(flow.resend(&mut rng), Err(FormError::NoPendingCode));
    }

    #[test]
    fn test_reset() {
        let mut rng = rng();
        let (mut flow, _) = flow_at_otp(&mut rng);
        flow.reset();
        assert_eq!(flow, OtpFlow::new());
    }

    #[test]
    fn test_placeholder_rng_produces_codes() {
        let mut rng = placeholder_rng();
        assert_eq!(generate_code(&mut rng).len(), 6);
    }
}
