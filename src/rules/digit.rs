//! Digit rule - checks for at least one decimal digit.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

/// Checks that the password contains at least one decimal digit (0-9).
///
/// # Returns
/// - `Some(reason)` if no digit is present
/// - `None` if at least one digit is present
pub fn digit_rule(password: &SecretString) -> RuleResult {
    let has_digit = password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit());
    if !has_digit {
        return Some("Password must contain at least one digit.");
    }
    None
}
