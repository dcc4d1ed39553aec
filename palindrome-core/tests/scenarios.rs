use palindrome_core::palindrome::{check_value, stats_value, PalindromeError};
use palindrome_core::{
    is_palindrome_ignore_case, is_palindrome_recursive, is_palindrome_simple,
    is_palindrome_with_whitespace, palindrome_stats, Policy,
};
use serde_json::{json, Value};

fn assert_table(name: &str, check: fn(&str) -> bool, cases: &[(&str, bool)]) {
    for (text, expected) in cases {
        assert_eq!(
            check(text),
            *expected,
            "{}({:?}) should return {}",
            name,
            text,
            expected
        );
    }
}

#[test]
fn test_simple_table() {
    assert_table(
        "is_palindrome_simple",
        is_palindrome_simple,
        &[
            ("racecar", true),
            ("level", true),
            ("deified", true),
            ("rotator", true),
            ("hello", false),
            ("world", false),
            ("python", false),
            ("testing", false),
            ("a", true),
            ("", true),
            ("aa", true),
            ("ab", false),
            ("12321", true),
            ("12345", false),
            ("@#@", true),
            ("@#%", false),
            ("Racecar", false),
            ("Level", false),
            ("Madam", false),
        ],
    );
}

#[test]
fn test_ignore_case_table() {
    assert_table(
        "is_palindrome_ignore_case",
        is_palindrome_ignore_case,
        &[
            ("Racecar", true),
            ("Level", true),
            ("Madam", true),
            ("A man a plan a canal Panama", false),
            ("Hello", false),
            ("World", false),
            ("A", true),
            ("a", true),
            ("", true),
            ("Aa", true),
            ("aA", true),
            ("a\u{1f}", true),
            ("aa\u{1c}", true),
            ("\u{1e}a", true),
        ],
    );
}

#[test]
fn test_ignore_case_long_string() {
    let base = "abc".repeat(100);
    let long_palindrome = format!("{}{}", base, base.chars().rev().collect::<String>());
    assert!(is_palindrome_ignore_case(&long_palindrome));
    assert!(is_palindrome_recursive(&long_palindrome));
}

#[test]
fn test_ignore_case_dotted_capital_i() {
    // U+0130 lowercases to "i" + COMBINING DOT ABOVE, which does not mirror
    assert!(!is_palindrome_ignore_case("\u{130}"));
    assert!(is_palindrome_simple("\u{130}"));
    assert!(is_palindrome_with_whitespace("\u{130}"));
}

#[test]
fn test_with_whitespace_table() {
    assert_table(
        "is_palindrome_with_whitespace",
        is_palindrome_with_whitespace,
        &[
            ("A man, a plan, a canal: Panama", true),
            ("Was it a car or a cat I saw?", true),
            ("No 'x' in Nixon", true),
            ("Eva, can I see bees in a cave?", true),
            ("This is not a palindrome", false),
            ("Hello, world!", false),
            ("12321", true),
            ("123 321", true),
            ("12:21", true),
            ("", true),
            ("a", true),
            (" ", true),
            ("  ", true),
        ],
    );
}

#[test]
fn test_recursive_table() {
    assert_table(
        "is_palindrome_recursive",
        is_palindrome_recursive,
        &[
            ("racecar", true),
            ("hello", false),
            ("a", true),
            ("", true),
            ("abba", true),
            ("abcba", true),
        ],
    );
}

#[test]
fn test_common_words() {
    for text in ["racecar", "level", "radar", "civic", "madam"] {
        assert!(is_palindrome_simple(text), "{text}");
    }
    for text in ["hello", "world", "python", "java", "testing"] {
        assert!(!is_palindrome_simple(text), "{text}");
    }
}

#[test]
fn test_stats_basic() {
    let stats = palindrome_stats("racecar");
    assert_eq!(stats.original, "racecar");
    assert_eq!(stats.length, 7);
    assert!(stats.simple);
    assert!(stats.ignore_case);
    assert!(stats.with_whitespace);
    assert!(stats.recursive);
    assert_eq!(stats.reversed, "racecar");
    assert!(!stats.is_empty);
    assert!(!stats.is_single_char);
}

#[test]
fn test_stats_sentence() {
    let stats = palindrome_stats("A man, a plan, a canal: Panama");
    assert_eq!(stats.original, "A man, a plan, a canal: Panama");
    assert!(!stats.simple);
    assert!(!stats.ignore_case);
    assert!(stats.with_whitespace);
    assert!(!stats.recursive);
    assert_eq!(stats.reversed, "amanaP :lanac a ,nalp a ,nam A");
}

#[test]
fn test_stats_empty() {
    let stats = palindrome_stats("");
    assert_eq!(stats.length, 0);
    assert!(stats.simple);
    assert!(stats.ignore_case);
    assert!(stats.with_whitespace);
    assert!(stats.recursive);
    assert_eq!(stats.reversed, "");
    assert!(stats.is_empty);
    assert!(!stats.is_single_char);
}

#[test]
fn test_stats_single_char() {
    let stats = palindrome_stats("a");
    assert_eq!(stats.length, 1);
    assert!(stats.simple);
    assert!(stats.is_single_char);
    assert!(!stats.is_empty);
}

#[test]
fn test_invalid_input_kinds() {
    let cases: [(Value, &str); 6] = [
        (json!(123), "integer"),
        (Value::Null, "null"),
        (json!(2.5), "float"),
        (json!([]), "list"),
        (json!([1, 2, 3]), "list"),
        (json!({}), "mapping"),
    ];
    for (value, kind) in cases {
        for policy in Policy::ALL {
            let err = check_value(policy, &value).unwrap_err();
            assert_eq!(err, PalindromeError::invalid_input(kind));
            assert_eq!(err.to_string(), format!("Input must be a string, got {}", kind));
        }
        assert!(matches!(
            stats_value(&value),
            Err(PalindromeError::InvalidInputKind { .. })
        ));
    }
}
