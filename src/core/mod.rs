// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file is the module declaration for the core functionality of csminer:
// options, the exclude window, the engine configuration and errors.

pub mod config;
pub mod error;
pub mod exclude;
pub mod types;

// Re-export the most commonly used items
pub use config::MinerConfig;
pub use error::{ExcludeError, INVALID_EXCLUDE_FORMAT_MESSAGE, LaunchError};
pub use exclude::ExcludeWindow;
pub use types::Options;

// Changelog:
// - v0.3.3: Replaced hashing and difficulty modules with option handling.
