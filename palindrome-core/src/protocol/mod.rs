//! JSON-RPC Protocol definitions
//!
//! Defines the line-delimited protocol spoken by palindrome-server.

use crate::palindrome::{PalindromeError, PalindromeStats, Policy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request from a client to palindrome-server
///
/// `text` is kept as raw JSON so that non-string arguments reach the
/// input check instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum Request {
    #[serde(rename = "is_palindrome_simple")]
    Simple {
        #[serde(default)]
        text: Value,
    },

    #[serde(rename = "is_palindrome_ignore_case")]
    IgnoreCase {
        #[serde(default)]
        text: Value,
    },

    #[serde(rename = "is_palindrome_with_whitespace")]
    WithWhitespace {
        #[serde(default)]
        text: Value,
    },

    #[serde(rename = "is_palindrome_recursive")]
    Recursive {
        #[serde(default)]
        text: Value,
    },

    /// Full stats record for one input
    #[serde(rename = "palindrome_stats")]
    Stats {
        #[serde(default)]
        text: Value,
    },

    /// Check under a policy chosen at runtime
    #[serde(rename = "check")]
    Check {
        policy: Policy,
        #[serde(default)]
        text: Value,
    },

    /// Shutdown the server
    #[serde(rename = "shutdown")]
    Shutdown,
}

/// Response from palindrome-server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Verdict {
        palindrome: bool,
    },
    Stats {
        stats: PalindromeStats,
    },
    Success {
        ok: bool,
    },
    Error {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
}

impl Response {
    pub fn success() -> Self {
        Response::Success { ok: true }
    }

    pub fn verdict(palindrome: bool) -> Self {
        Response::Verdict { palindrome }
    }

    pub fn stats(stats: PalindromeStats) -> Self {
        Response::Stats { stats }
    }

    pub fn error(msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Response::Error {
            error: msg.into(),
            kind: Some(kind.into()),
        }
    }

    pub fn parse_error(msg: impl std::fmt::Display) -> Self {
        Response::error(format!("Parse error: {}", msg), "parse_error")
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<PalindromeError> for Response {
    fn from(err: PalindromeError) -> Self {
        Response::error(err.to_string(), err.kind())
    }
}

/// JSON-RPC message wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcMessage<T> {
    pub jsonrpc: String,
    pub id: Option<u64>,
    #[serde(flatten)]
    pub content: T,
}

impl<T> RpcMessage<T> {
    pub fn new(id: u64, content: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Some(id),
            content,
        }
    }
}
