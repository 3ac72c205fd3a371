//! Special character rule - checks for at least one character from a fixed set.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Checks that the password contains at least one special character
/// from the fixed set `!@#$%^&*`.
///
/// # Returns
/// - `Some(reason)` if no special character is present
/// - `None` if at least one special character is present
pub fn special_char_rule(password: &SecretString) -> RuleResult {
    let has_special = password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c));
    if !has_special {
        return Some("Password must contain at least one special character (!@#$%^&*).");
    }
    None
}
