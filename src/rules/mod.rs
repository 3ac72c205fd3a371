//! Password composition rules
//!
//! Each rule checks a single requirement and reports a fixed message when
//! the password violates it. Rules are evaluated in a fixed order by the
//! evaluator and only the first violation is reported.

mod digit;
mod length;
mod special;
mod uppercase;

pub use digit::digit_rule;
pub use length::length_rule;
pub use special::special_char_rule;
pub use uppercase::uppercase_rule;

/// Result type for rule functions.
/// - `Some(reason)` - Rule violated, with the message reported to the caller
/// - `None` - Rule satisfied
pub type RuleResult = Option<&'static str>;
