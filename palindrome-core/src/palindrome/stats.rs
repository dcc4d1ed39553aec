//! Aggregate stats record

use serde::{Deserialize, Serialize};

use super::check::{
    is_palindrome_ignore_case, is_palindrome_recursive, is_palindrome_simple,
    is_palindrome_with_whitespace, reverse,
};

/// Every verdict for one input, plus a little metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeStats {
    pub original: String,
    /// Length in chars, not bytes
    pub length: usize,
    pub simple: bool,
    pub ignore_case: bool,
    pub with_whitespace: bool,
    pub recursive: bool,
    pub reversed: String,
    pub is_empty: bool,
    pub is_single_char: bool,
}

pub fn palindrome_stats(text: &str) -> PalindromeStats {
    let length = text.chars().count();
    PalindromeStats {
        original: text.to_string(),
        length,
        simple: is_palindrome_simple(text),
        ignore_case: is_palindrome_ignore_case(text),
        with_whitespace: is_palindrome_with_whitespace(text),
        recursive: is_palindrome_recursive(text),
        reversed: reverse(text),
        is_empty: length == 0,
        is_single_char: length == 1,
    }
}
