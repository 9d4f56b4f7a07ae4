// --- File: crates/rentify_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Request timeout used when the configuration gives none (0).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Builds the reqwest client used for outbound record store calls.
///
/// The connect timeout is capped separately so an unreachable store fails
/// fast even with a long request timeout.
pub fn create_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ReqwestError> {
    let timeout_secs = effective_timeout_secs(timeout_secs);
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(
            timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS),
        ))
        .user_agent(user_agent)
        .build()
}

fn effective_timeout_secs(timeout_secs: u64) -> u64 {
    if timeout_secs == 0 {
        DEFAULT_TIMEOUT_SECS
    } else {
        timeout_secs
    }
}
