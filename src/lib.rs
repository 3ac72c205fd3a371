//! Password validation HTTP service
//!
//! A minimal service exposing a single validation endpoint: the caller
//! posts a candidate password and receives a verdict saying whether it
//! satisfies a fixed set of composition rules, and if not, which rule
//! failed first.
//!
//! Rules are evaluated in a fixed order with short-circuiting, so only
//! the first violation is reported:
//!
//! 1. At least 8 characters
//! 2. At least one uppercase letter (A-Z)
//! 3. At least one digit (0-9)
//! 4. At least one special character from `!@#$%^&*`
//!
//! # Environment Variables
//!
//! - `PWD_VALIDATOR_ADDR`: socket address to bind (default: `127.0.0.1:8080`)
//! - `PWD_VALIDATOR_CONTACT`: identifier shown by the root greeting
//! - `RUST_LOG`: tracing filter override
//!
//! # Example
//!
//! ```rust
//! use pwd_validator::evaluate_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Valid1!@".to_string().into());
//! let verdict = evaluate_password(&password);
//!
//! assert!(verdict.valid);
//! ```

// Internal modules
mod evaluator;
mod rules;
mod verdict;

// Service wiring
pub mod config;
pub mod handlers;
pub mod logging;

// Public API
pub use evaluator::evaluate_password;
pub use verdict::{ValidationRequest, Verdict};
