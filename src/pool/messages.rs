// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/messages.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file classifies the newline-delimited JSON messages received from the
// pool.
//
// Tree Location:
// - src/pool/messages.rs (pool message parsing)
// - Depends on: serde, serde_json

use super::protocol::LOGIN_REQUEST_ID;
use serde::Deserialize;
use serde_json::Value;

/// Job announced by the pool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolJob {
    pub job_id: String,

    /// Hex-encoded share target
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub height: Option<u64>,

    #[serde(default)]
    pub algo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct RpcError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolMessage {
    /// Reply to the login request, optionally carrying the first job
    LoginAccepted { job: Option<PoolJob> },
    LoginRejected { message: String },
    /// New job pushed by the pool
    Job(PoolJob),
    /// Error reply to any other request
    Error { code: i64, message: String },
}

/// Parse one line from the pool. Messages csminer does not act on yield `None`.
pub fn parse_pool_message(line: &str) -> Result<Option<PoolMessage>, serde_json::Error> {
    let value: Value = serde_json::from_str(line)?;

    if let Some(method) = value.get("method").and_then(Value::as_str) {
        return match (method, value.get("params")) {
            ("job", Some(params)) => Ok(Some(PoolMessage::Job(PoolJob::deserialize(params)?))),
            _ => Ok(None),
        };
    }

    let is_login_reply = value.get("id").and_then(Value::as_u64) == Some(LOGIN_REQUEST_ID);
    let error = match value.get("error") {
        Some(err) if !err.is_null() => Some(RpcError::deserialize(err)?),
        _ => None,
    };

    match (is_login_reply, error) {
        (true, Some(err)) => Ok(Some(PoolMessage::LoginRejected {
            message: err.message,
        })),
        (true, None) => {
            let job = match value.get("result").and_then(|result| result.get("job")) {
                Some(job) if !job.is_null() => Some(PoolJob::deserialize(job)?),
                _ => None,
            };
            Ok(Some(PoolMessage::LoginAccepted { job }))
        }
        (false, Some(err)) => Ok(Some(PoolMessage::Error {
            code: err.code,
            message: err.message,
        })),
        (false, None) => Ok(None),
    }
}
