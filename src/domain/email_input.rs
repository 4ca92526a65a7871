//! src/domain/email_input.rs

/// Value of the email input at the moment the form was submitted.
///
/// The browser's `type="email"` input is the only validation this value
/// ever gets, so it is kept exactly as typed: no trimming, no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailInput(String);

impl EmailInput {
    pub fn parse(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
