//! Request and verdict types for the validation endpoint.

use serde::{Deserialize, Serialize};

/// Body of a `POST /v1/checkPassword` request.
///
/// A missing `password` field deserializes to the empty string, and an
/// unparsable body falls back to `Default`, so malformed input is always
/// treated as an empty password rather than a client error.
#[derive(Debug, Default, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub password: String,
}

/// Outcome of evaluating a password against the composition rules.
///
/// Serialized as `{"valid": <bool>, "reason": "<string>"}`. The reason is
/// the first failing rule's message, or empty when the password is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    pub reason: String,
}

impl Verdict {
    /// Verdict for a password that satisfies every rule.
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    /// Verdict for a password rejected with the given rule message.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}
