//! Palindrome predicates
//!
//! Every predicate works on Unicode scalar values (`char`s). Reversal is not
//! grapheme aware: a base letter followed by a combining mark comes out as
//! mark-then-letter. Verdicts on such input depend on that order, so it
//! stays.

/// Reverse `text` char by char.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// True for the empty string and any single-char string.
fn is_trivial(text: &str) -> bool {
    text.chars().nth(1).is_none()
}

/// Whitespace as `str.isspace` sees it: Unicode White_Space plus the
/// information separators U+001C..=U+001F.
fn is_edge_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn equals_reversed(text: &str) -> bool {
    if is_trivial(text) {
        return true;
    }
    text == reverse(text)
}

/// Case-sensitive check with no normalization.
///
/// # Examples
///
/// ```
/// use palindrome_core::is_palindrome_simple;
///
/// assert!(is_palindrome_simple("racecar"));
/// assert!(!is_palindrome_simple("hello"));
/// assert!(!is_palindrome_simple("Racecar"));
/// ```
pub fn is_palindrome_simple(text: &str) -> bool {
    equals_reversed(text)
}

/// Lowercases and trims the edges only.
///
/// Whitespace and punctuation inside the text still count, so
/// `"A man a plan a canal Panama"` is rejected.
pub fn is_palindrome_ignore_case(text: &str) -> bool {
    let lowered = text.to_lowercase();
    equals_reversed(lowered.trim_matches(is_edge_space))
}

/// Lowercases, then keeps ASCII letters and digits only.
///
/// Lowercasing runs first, so a char whose lowercase form is ASCII
/// (KELVIN SIGN becomes `k`) is kept.
pub fn is_palindrome_with_whitespace(text: &str) -> bool {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    equals_reversed(&cleaned)
}

/// Same verdict as [`is_palindrome_simple`], walking two cursors inwards
/// instead of building a reversed copy.
pub fn is_palindrome_recursive(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 1 {
        return true;
    }

    let (mut start, mut end) = (0, chars.len() - 1);
    while start < end {
        if chars[start] != chars[end] {
            return false;
        }
        start += 1;
        end -= 1;
    }
    true
}
