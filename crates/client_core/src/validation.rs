//! Pre-flight checks on the submitted email, run before any network activity.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimal `local@domain.tld` shape; RFC 5322 edge cases are not honored.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email")]
    EmptyInput,
    #[error("Please enter a valid email address")]
    MalformedEmail,
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

pub fn valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Validates the email as typed. Whitespace-only input counts as empty;
/// any other whitespace makes the address malformed.
pub fn validate(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !valid_email(email) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}
