// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file declares the help module: usage text for -help and the startup
// report printed before the engine takes over.
//
// Tree Location:
// - src/help/mod.rs (help module entry point)
// - Submodules: startup, usage

pub mod startup;
pub mod usage;

pub use startup::{report_startup, write_startup_report};
pub use usage::{banner, command, render_usage};

pub const APPLICATION_NAME: &str = "bgminer";
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
pub const STATS_WEBPAGE: &str = "https://cryptonote.social";
pub const FEEDBACK_CONTACT: &str = "cryptonote.social@gmail.com";

/// Username mined under when the operator does not pick one
pub const DONATE_USERNAME: &str = "donate-getmonero-org";

// Changelog:
// - v0.3.3: Replaced benchmark/mining help pages with usage and startup output.
