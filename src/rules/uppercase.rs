//! Uppercase rule - checks for at least one uppercase ASCII letter.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password contains at least one uppercase letter (A-Z).
///
/// # Returns
/// - `Some(reason)` if no uppercase letter is present
/// - `None` if at least one uppercase letter is present
pub fn uppercase_rule(password: &SecretString) -> RuleResult {
    let has_upper = password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase());
    if !has_upper {
        return Some("Password must contain at least one uppercase letter.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_rule_missing() {
        let pwd = SecretString::new("valid1!@".to_string().into());
        let result = uppercase_rule(&pwd);
        assert_eq!(
            result,
            Some("Password must contain at least one uppercase letter.")
        );
    }

    #[test]
    fn test_uppercase_rule_present() {
        let pwd = SecretString::new("Valid1!@".to_string().into());
        assert_eq!(uppercase_rule(&pwd), None);
    }

    #[test]
    fn test_uppercase_rule_only_ascii_counts() {
        // Uppercase outside A-Z does not satisfy the rule.
        let pwd = SecretString::new("Èvalid1!@".to_string().into());
        assert!(uppercase_rule(&pwd).is_some());
    }
}
