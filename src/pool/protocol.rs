// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/protocol.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file builds the JSON-RPC requests csminer sends to the pool.
//
// Tree Location:
// - src/pool/protocol.rs (Stratum protocol logic)
// - Depends on: serde_json, tracing, crate::core::config

use crate::core::config::MinerConfig;
use serde_json::{Value, json};
use tracing::debug;

/// Request id used for login; the pool echoes it in the reply
pub const LOGIN_REQUEST_ID: u64 = 1;

/// Constructs messages for the Stratum protocol
pub struct StratumProtocol;

impl StratumProtocol {
    /// Pool login name: "wallet.username" when a wallet accompanies the username
    pub fn login_name(username: &str, wallet: &str) -> String {
        if wallet.is_empty() {
            username.to_string()
        } else {
            format!("{}.{}", wallet, username)
        }
    }

    /// Create a login request message
    pub fn create_login_request(config: &MinerConfig) -> Value {
        json!({
            "id": LOGIN_REQUEST_ID,
            "jsonrpc": "2.0",
            "method": "login",
            "params": {
                "login": Self::login_name(config.username(), config.wallet()),
                "pass": "",
                "rigid": config.rig_id(),
                "agent": config.agent(),
                "config": config.advanced_config(),
            }
        })
    }

    /// Convert a JSON message to a string with newline
    pub fn to_message(json: Value) -> String {
        debug!("Serialized Stratum message: {}", json);
        format!("{}\n", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_name_without_wallet() {
        assert_eq!(StratumProtocol::login_name("alice", ""), "alice");
    }

    #[test]
    fn test_login_name_with_wallet() {
        assert_eq!(StratumProtocol::login_name("alice", "4AdUndX"), "4AdUndX.alice");
    }

    #[test]
    fn test_to_message_is_newline_terminated() {
        let message = StratumProtocol::to_message(json!({"id": 1}));
        assert_eq!(message, "{\"id\":1}\n");
    }
}

// Changelog:
// - v0.3.3: Reduced to the login request used by the pool session.
//   - Login carries rig id, agent and the advanced config string.
