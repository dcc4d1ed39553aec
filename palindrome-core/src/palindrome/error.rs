//! Palindrome error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalindromeError {
    /// The argument was not a string. `found` names the offending kind.
    #[error("Input must be a string, got {found}")]
    InvalidInputKind { found: String },
}

impl PalindromeError {
    pub fn invalid_input(found: impl Into<String>) -> Self {
        PalindromeError::InvalidInputKind {
            found: found.into(),
        }
    }

    /// Stable machine-readable code used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            PalindromeError::InvalidInputKind { .. } => "invalid_input_kind",
        }
    }
}
