// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file defines the operator-facing option schema for csminer. The clap
// derive below is the single source of names, types, defaults and help text.
//
// Tree Location:
// - src/core/types.rs (command-line options)
// - Depends on: clap, crate::help, crate::utils::args

use crate::help::{DONATE_USERNAME, usage};
use crate::utils::args::normalize_args;
use clap::{ArgAction, FromArgMatches, Parser};
use std::ffi::OsString;

/// Command-line options for csminer, as typed by the operator
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "csminer",
    about = "Pool-mining client for cryptonote.social",
    disable_version_flag = true
)]
pub struct Options {
    /// Number of mining threads the engine should start with
    #[arg(
        long,
        default_value_t = 3,
        value_name = "int",
        help = "number of threads"
    )]
    pub threads: usize,

    /// Pool account name; new usernames are established by the first valid share
    #[arg(
        long,
        default_value = DONATE_USERNAME,
        allow_hyphen_values = true,
        value_name = "string",
        help = "your pool username"
    )]
    pub user: String,

    /// Label separating this machine from others mining under the same user
    #[arg(
        long,
        default_value = "csminer",
        allow_hyphen_values = true,
        value_name = "string",
        help = "your rig id"
    )]
    pub rigid: String,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "bool",
        help = "whether to use TLS when connecting to the pool"
    )]
    pub tls: bool,

    /// Raw "XX-YY" pause window text; resolved by `ExcludeWindow::parse`
    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true,
        value_name = "XX-YY",
        help = "pause mining during these hours, e.g. -exclude=11-16 will pause mining between 11am and 4pm",
        long_help = "pause mining during the specified hours. Format is XX-YY where XX and YY are hours of \
                     the day designated in 24 hour time. For example, -exclude=11-16 will pause mining between \
                     11:00am and 4:00pm. This can be used, for example, to pause mining during times of high \
                     machine usage or high electricity rates."
    )]
    pub exclude: String,

    /// Opaque advanced configuration, forwarded to the pool untouched
    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true,
        value_name = "string",
        help = "advanced pool configuration options, e.g. start_diff=1000;donate=1.0",
        long_help = "advanced pool config option string, for specifying starting diff, donation percentage, \
                     email address for notifications, and more. See \"advanced configuration options\" under \
                     Get Started on the pool site for details. Some options will require you to also specify \
                     your wallet id in order to be changed."
    )]
    pub config: String,

    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true,
        value_name = "string",
        help = "your wallet id. only specify this when establishing a new username, or specifying a 'secure' config change such as a change in donation amount",
        long_help = "your wallet id. You only need to specify this when establishing a new username, or if \
                     specifying a 'secure' config parameter change such as a new pool donation amount or email \
                     address. New usernames will be established upon submitting at least one valid share."
    )]
    pub wallet: String,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "bool",
        help = "run only when screen is locked"
    )]
    pub saver: bool,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "bool",
        help = "whether to connect to dev server"
    )]
    pub dev: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: 3,
            user: DONATE_USERNAME.to_string(),
            rigid: "csminer".to_string(),
            tls: false,
            exclude: String::new(),
            config: String::new(),
            wallet: String::new(),
            saver: false,
            dev: false,
        }
    }
}

impl Options {
    /// Parse a full argument vector (program name first) without touching globals.
    ///
    /// Single-dash long flags such as `-threads=4` are accepted alongside the
    /// `--threads 4` form. Help requests come back as a `clap::Error` of kind
    /// `DisplayHelp`, leaving the exit decision to the caller.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = usage::command();
        let matches = command.try_get_matches_from_mut(normalize_args(args))?;
        Self::from_arg_matches(&matches).map_err(|err| err.format(&mut command))
    }
}

// Changelog:
// - v0.3.3: Replaced the mining/benchmark argument set with the csminer options.
//   - Boolean flags accept both "-tls" and "-tls=false".
//   - Parsing returns errors instead of exiting.
//   - String options take values starting with '-' (e.g. "-user -dev").
