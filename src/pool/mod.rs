// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file is the module declaration for pool communication used by the
// reference pool session.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: client, messages, protocol

pub mod client;
pub mod messages;
pub mod protocol;

// Re-export key types for convenience
pub use client::PoolClient;
pub use messages::{PoolJob, PoolMessage, parse_pool_message};
pub use protocol::StratumProtocol;

/// Plaintext pool endpoint
pub const POOL_ENDPOINT: &str = "cryptonote.social:5555";
/// TLS pool endpoint
pub const POOL_TLS_ENDPOINT: &str = "cryptonote.social:5556";
/// Local development pool
pub const DEV_POOL_ENDPOINT: &str = "127.0.0.1:5555";
pub const DEV_POOL_TLS_ENDPOINT: &str = "127.0.0.1:5556";

/// Pick the pool endpoint for the TLS and dev flags
pub fn select_endpoint(use_tls: bool, dev: bool) -> &'static str {
    match (dev, use_tls) {
        (false, false) => POOL_ENDPOINT,
        (false, true) => POOL_TLS_ENDPOINT,
        (true, false) => DEV_POOL_ENDPOINT,
        (true, true) => DEV_POOL_TLS_ENDPOINT,
    }
}
