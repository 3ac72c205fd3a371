//! Length rule - checks password minimum length.

use super::RuleResult;
use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Checks that the password is at least 8 characters long.
///
/// Length is counted in characters, not bytes, so multi-byte input is not
/// over-counted.
///
/// # Returns
/// - `Some(reason)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("Password must be at least 8 characters long.");
    }
    None
}
