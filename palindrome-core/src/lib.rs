//! Palindrome Core Library
//!
//! Core functionality for palindrome checks:
//! - Four predicates, one per normalization policy
//! - Aggregate stats record
//! - Input boundary rejecting non-string arguments
//! - JSON-RPC protocol types for palindrome-server
//! - Python bindings (pyo3, optional)

pub mod palindrome;
pub mod protocol;

#[cfg(feature = "python")]
mod python;

pub use palindrome::{
    is_palindrome_ignore_case, is_palindrome_recursive, is_palindrome_simple,
    is_palindrome_with_whitespace, palindrome_stats, PalindromeError, PalindromeStats, Policy,
};
pub use protocol::{Request, Response};
