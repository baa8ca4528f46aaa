// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/usage.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file builds the clap command used for parsing and for -help output:
// application banner, option reference, monitoring page and feedback contact.
//
// Tree Location:
// - src/help/usage.rs (usage text)
// - Depends on: clap, crate::core::types

use super::{APPLICATION_NAME, FEEDBACK_CONTACT, STATS_WEBPAGE, VERSION_STRING};
use crate::core::types::Options;
use clap::{Command, CommandFactory};

/// "==== bgminer 0.3.3 ====" header shared by usage and version output
pub fn banner() -> String {
    format!("==== {} {} ====", APPLICATION_NAME, VERSION_STRING)
}

fn footer() -> String {
    format!(
        "Monitor your miner progress at: {}\nSend feedback to: {}",
        STATS_WEBPAGE, FEEDBACK_CONTACT
    )
}

/// Option schema decorated with the csminer usage text
pub fn command() -> Command {
    Options::command()
        .before_help(banner())
        .after_help(footer())
        .after_long_help(footer())
}

/// Full usage text as printed for -help
pub fn render_usage() -> String {
    command().render_long_help().to_string()
}
