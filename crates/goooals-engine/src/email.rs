use std::sync::LazyLock;

use regex::Regex;

use crate::error::EngineError;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Loose client-side shape check run before an email is dispatched.
pub fn validate_email_address(address: &str) -> Result<(), EngineError> {
    if address.is_empty() || !EMAIL_SHAPE.is_match(address) {
        return Err(EngineError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        assert!(validate_email_address("someone@example.com").is_ok());
        assert!(validate_email_address("a.b+c@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_missing_parts() {
        for bad in ["", "someone", "someone@example", "@.", "some one@example"] {
            assert!(validate_email_address(bad).is_err(), "{bad} accepted");
        }
    }
}
