//! Palindrome checking module
//!
//! Pure predicates deciding whether a string reads the same backwards under
//! a given normalization policy, plus an aggregate stats record.

pub mod check;
pub mod error;
pub mod input;
pub mod policy;
pub mod stats;

pub use check::{
    is_palindrome_ignore_case, is_palindrome_recursive, is_palindrome_simple,
    is_palindrome_with_whitespace, reverse,
};
pub use error::PalindromeError;
pub use input::{check_value, stats_value, text_arg};
pub use policy::Policy;
pub use stats::{palindrome_stats, PalindromeStats};
