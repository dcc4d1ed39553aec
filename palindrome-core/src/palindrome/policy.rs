//! Normalization policies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::check::{
    is_palindrome_ignore_case, is_palindrome_recursive, is_palindrome_simple,
    is_palindrome_with_whitespace,
};

/// Which normalization runs before the reversal comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    Simple,
    IgnoreCase,
    WithWhitespace,
    Recursive,
}

impl Policy {
    pub const ALL: [Policy; 4] = [
        Policy::Simple,
        Policy::IgnoreCase,
        Policy::WithWhitespace,
        Policy::Recursive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Simple => "simple",
            Policy::IgnoreCase => "ignore_case",
            Policy::WithWhitespace => "with_whitespace",
            Policy::Recursive => "recursive",
        }
    }

    /// Run the predicate this policy names
    pub fn check(&self, text: &str) -> bool {
        match self {
            Policy::Simple => is_palindrome_simple(text),
            Policy::IgnoreCase => is_palindrome_ignore_case(text),
            Policy::WithWhitespace => is_palindrome_with_whitespace(text),
            Policy::Recursive => is_palindrome_recursive(text),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("Unknown policy: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_roundtrip() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.name()));
        }
        assert!("reverse".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_dispatch() {
        let text = "Was it a car or a cat I saw?";
        assert!(!Policy::Simple.check(text));
        assert!(!Policy::IgnoreCase.check(text));
        assert!(Policy::WithWhitespace.check(text));
        assert!(!Policy::Recursive.check(text));
    }
}
