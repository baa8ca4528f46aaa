// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file serves as the library entry point for csminer, the command-line
// front end of the pool-mining client. It exports the option parser, the
// configuration record, the startup reporter and the engine boundary.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, help, launcher, miner, pool, utils

pub mod core;
pub mod help;
pub mod launcher;
pub mod miner;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{ExcludeError, ExcludeWindow, LaunchError, MinerConfig, Options};
pub use crate::launcher::{launch, prepare};
pub use crate::miner::{EngineError, MachineState, MachineStater, MiningEngine, PoolSession};

// Changelog:
// - v0.3.3: Library root reorganized around the csminer front end.
//   - Added launcher module; dropped benchmark and GPU exports.
