//! Python bindings for palindrome-core
//!
//! Provides pyo3 FFI interface for direct Python integration. Every function
//! accepts any Python object and raises `TypeError` unless it is a `str`.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};

use crate::palindrome::{palindrome_stats as rust_palindrome_stats, PalindromeError, Policy};

/// Extract a `str` argument or raise `TypeError`
fn text_arg(text: &Bound<'_, PyAny>) -> PyResult<String> {
    if !text.is_instance_of::<PyString>() {
        let found = text
            .get_type()
            .name()
            .map(|n| n.to_string())
            .unwrap_or_else(|_| "object".to_string());
        return Err(PyTypeError::new_err(
            PalindromeError::invalid_input(found).to_string(),
        ));
    }
    text.extract()
}

fn check(policy: Policy, text: &Bound<'_, PyAny>) -> PyResult<bool> {
    let text = text_arg(text)?;
    Ok(policy.check(&text))
}

/// Case-sensitive palindrome check
#[pyfunction]
fn is_palindrome_simple(text: &Bound<'_, PyAny>) -> PyResult<bool> {
    check(Policy::Simple, text)
}

/// Palindrome check after lowercasing and trimming the edges
#[pyfunction]
fn is_palindrome_ignore_case(text: &Bound<'_, PyAny>) -> PyResult<bool> {
    check(Policy::IgnoreCase, text)
}

/// Palindrome check on lowercase ASCII letters and digits only
#[pyfunction]
fn is_palindrome_with_whitespace(text: &Bound<'_, PyAny>) -> PyResult<bool> {
    check(Policy::WithWhitespace, text)
}

/// Two-pointer palindrome check, same verdict as `is_palindrome_simple`
#[pyfunction]
fn is_palindrome_recursive(text: &Bound<'_, PyAny>) -> PyResult<bool> {
    check(Policy::Recursive, text)
}

/// All verdicts for one string
///
/// Returns:
///     Dict with keys: "original", "length", "simple", "ignore_case",
///     "with_whitespace", "recursive", "reversed", "is_empty", "is_single_char"
#[pyfunction]
fn palindrome_stats(py: Python<'_>, text: &Bound<'_, PyAny>) -> PyResult<PyObject> {
    let text = text_arg(text)?;
    let stats = rust_palindrome_stats(&text);

    let result = PyDict::new_bound(py);
    result.set_item("original", stats.original)?;
    result.set_item("length", stats.length)?;
    result.set_item("simple", stats.simple)?;
    result.set_item("ignore_case", stats.ignore_case)?;
    result.set_item("with_whitespace", stats.with_whitespace)?;
    result.set_item("recursive", stats.recursive)?;
    result.set_item("reversed", stats.reversed)?;
    result.set_item("is_empty", stats.is_empty)?;
    result.set_item("is_single_char", stats.is_single_char)?;
    Ok(result.into())
}

/// palindrome_core Python module
#[pymodule]
fn palindrome_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_palindrome_simple, m)?)?;
    m.add_function(wrap_pyfunction!(is_palindrome_ignore_case, m)?)?;
    m.add_function(wrap_pyfunction!(is_palindrome_with_whitespace, m)?)?;
    m.add_function(wrap_pyfunction!(is_palindrome_recursive, m)?)?;
    m.add_function(wrap_pyfunction!(palindrome_stats, m)?)?;
    Ok(())
}
