// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/mod.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file declares the boundary between the csminer front end and the
// mining engine: the host-state capability the engine queries, and the
// blocking session entry point the front end calls.
//
// Tree Location:
// - src/miner/mod.rs (engine boundary)
// - Submodules: machine, session

pub mod machine;
pub mod session;

pub use machine::FixedMachineState;
pub use session::PoolSession;

use crate::core::config::MinerConfig;
use thiserror::Error;

/// Host condition as seen by saver mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// Someone is using the machine
    Active,
    /// Screen locked
    Locked,
    /// No input for a while, screen not locked
    Idle,
}

/// Platform-specific probe for the host's state. Shared with the engine for
/// the whole session, so implementations must be thread safe.
pub trait MachineStater: Send + Sync {
    fn machine_state(&self) -> MachineState;

    /// Whether saver mode may mine right now
    fn permits_saver_mining(&self) -> bool {
        !matches!(self.machine_state(), MachineState::Active)
    }
}

/// Errors an engine reports when a session cannot continue
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to connect to pool at {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TLS connections are not available in this build")]
    TlsUnavailable,

    #[error("pool rejected login: {0}")]
    LoginRejected(String),

    #[error("pool closed the connection")]
    ConnectionClosed,

    #[error("invalid message from pool: {0}")]
    Protocol(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A mining engine. `run` blocks for the lifetime of the session and only
/// returns once it ends or fails.
pub trait MiningEngine {
    fn run(&self, config: MinerConfig) -> Result<(), EngineError>;
}

// Changelog:
// - v0.3.3: Replaced the CPU/GPU miner modules with the engine boundary traits.
