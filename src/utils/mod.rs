// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/mod.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file is the module declaration for utility functions in csminer.
//
// Tree Location:
// - src/utils/mod.rs (utils module entry point)
// - Submodules: args, user_agent

pub mod args;
pub mod user_agent;

pub use args::normalize_args;
pub use user_agent::user_agent;
