//! Source handlers, one per external data source.
//!
//! Two behavioral variants share the same contract (input string in, JSON
//! source result out):
//!
//! - live handlers ([`receitaws`], [`bcb`]) issue a real HTTP GET and map or
//!   wrap the response;
//! - reference-only handlers ([`manual`], [`listings`]) perform no I/O and
//!   surface the portal URL plus the input context for manual follow-up.
//!
//! No handler ever returns an upstream failure as `Err`: every failure path
//! becomes an `erro` field inside the result, so the dispatcher's fan-out is
//! immune to any single broken source. The only `Err` a handler can produce
//! is a registry wiring bug ([`crate::error::LookupError::UnknownSourceKey`]).

pub mod bcb;
pub mod listings;
pub mod manual;
pub mod receitaws;

use std::time::Duration;

/// Timeout applied to every live request. No retries are performed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-like identification, matching what the consulted portals expect.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Build the HTTP client shared by all live handlers within a run.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}
