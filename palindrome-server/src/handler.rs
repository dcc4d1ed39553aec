//! Request handler for palindrome-server

use palindrome_core::palindrome::{check_value, stats_value, Policy};
use palindrome_core::{Request, Response};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Default)]
pub struct Handler {
    handled: u64,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests answered so far
    pub fn handled(&self) -> u64 {
        self.handled
    }

    pub fn handle(&mut self, request: &Request) -> Response {
        self.handled += 1;
        match request {
            Request::Simple { text } => self.handle_check(Policy::Simple, text),
            Request::IgnoreCase { text } => self.handle_check(Policy::IgnoreCase, text),
            Request::WithWhitespace { text } => self.handle_check(Policy::WithWhitespace, text),
            Request::Recursive { text } => self.handle_check(Policy::Recursive, text),
            Request::Check { policy, text } => self.handle_check(*policy, text),
            Request::Stats { text } => self.handle_stats(text),
            Request::Shutdown => {
                info!("Shutdown requested after {} requests", self.handled);
                Response::success()
            }
        }
    }

    fn handle_check(&self, policy: Policy, text: &Value) -> Response {
        debug!("Check request: policy={}", policy);
        match check_value(policy, text) {
            Ok(verdict) => Response::verdict(verdict),
            Err(e) => {
                debug!("Rejected {} request: {}", policy, e);
                e.into()
            }
        }
    }

    fn handle_stats(&self, text: &Value) -> Response {
        debug!("Stats request");
        match stats_value(text) {
            Ok(stats) => Response::stats(stats),
            Err(e) => e.into(),
        }
    }
}
