//! Dynamic input boundary
//!
//! Wire callers send arbitrary JSON. Anything that is not a JSON string is
//! rejected here, before any normalization runs.

use serde_json::Value;

use super::error::PalindromeError;
use super::policy::Policy;
use super::stats::{palindrome_stats, PalindromeStats};

/// Name of a JSON value's kind, as reported in `InvalidInputKind`
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Borrow the string out of `value`, or fail with `InvalidInputKind`.
pub fn text_arg(value: &Value) -> Result<&str, PalindromeError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => {
            let found = json_kind(other);
            log::debug!("rejecting non-string input of kind {}", found);
            Err(PalindromeError::invalid_input(found))
        }
    }
}

pub fn check_value(policy: Policy, value: &Value) -> Result<bool, PalindromeError> {
    let text = text_arg(value)?;
    let verdict = policy.check(text);
    log::debug!("{} check on {} chars -> {}", policy, text.chars().count(), verdict);
    Ok(verdict)
}

pub fn stats_value(value: &Value) -> Result<PalindromeStats, PalindromeError> {
    text_arg(value).map(palindrome_stats)
}
