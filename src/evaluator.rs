//! Password evaluator - runs the composition rules in order.

use secrecy::SecretString;

use crate::rules::{RuleResult, digit_rule, length_rule, special_char_rule, uppercase_rule};
use crate::verdict::Verdict;

/// Evaluates a password against the composition rules and returns a verdict.
///
/// Rules run in a fixed order (length, uppercase, digit, special character)
/// and evaluation stops at the first violation, so the verdict carries only
/// the first failing rule's message. A password that satisfies every rule
/// yields `valid=true` with an empty reason.
pub fn evaluate_password(password: &SecretString) -> Verdict {
    let rules: [(&str, fn(&SecretString) -> RuleResult); 4] = [
        ("length", length_rule),
        ("uppercase", uppercase_rule),
        ("digit", digit_rule),
        ("special", special_char_rule),
    ];

    for (rule_name, rule_fn) in rules {
        if let Some(reason) = rule_fn(password) {
            tracing::debug!(rule = rule_name, "password rejected");
            return Verdict::rejected(reason);
        }
    }

    tracing::debug!("password accepted");
    Verdict::accepted()
}
