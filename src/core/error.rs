// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/error.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file defines the error taxonomy of the front end. Every variant is
// fatal; main.rs is the only place that turns one into a process exit.
//
// Tree Location:
// - src/core/error.rs (error types)
// - Depends on: thiserror, clap, crate::miner

use crate::miner::EngineError;
use thiserror::Error;

/// Diagnostic shown for any exclude string that is not two hyphen-separated integers
pub const INVALID_EXCLUDE_FORMAT_MESSAGE: &str =
    "invalid format for exclude specified. Specify XX-YY, e.g. 11-16 for 11:00am to 4:00pm.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExcludeError {
    #[error("{}", INVALID_EXCLUDE_FORMAT_MESSAGE)]
    Malformed { input: String },

    #[error("{}: XX and YY must each be between 0 and 24", INVALID_EXCLUDE_FORMAT_MESSAGE)]
    OutOfRange { start: i64, end: i64 },
}

#[derive(Error, Debug)]
pub enum LaunchError {
    /// Bad flags, bad values, or an explicit help/version request
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Exclude(#[from] ExcludeError),

    #[error("Miner failed: {0}")]
    Engine(#[from] EngineError),
}

impl LaunchError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Usage(err) => err.exit_code(),
            LaunchError::Exclude(_) | LaunchError::Engine(_) => 1,
        }
    }
}
