// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/startup.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file prints the operator-facing summary of the effective configuration
// before the engine starts mining.
//
// Tree Location:
// - src/help/startup.rs (startup report)
// - Depends on: std, tracing, crate::core::config

use super::{APPLICATION_NAME, DONATE_USERNAME, FEEDBACK_CONTACT, STATS_WEBPAGE, VERSION_STRING};
use crate::core::config::MinerConfig;
use std::io::{self, Write};
use tracing::{info, warn};

/// Write the startup summary to `out`.
pub fn write_startup_report<W: Write>(out: &mut W, config: &MinerConfig) -> io::Result<()> {
    writeln!(out, "==== {} v{} ====", APPLICATION_NAME, VERSION_STRING)?;

    if config.username() == DONATE_USERNAME {
        writeln!(
            out,
            "\nNo username specified, mining on behalf of donate.getmonero.org."
        )?;
    }
    if config.saver() {
        writeln!(
            out,
            "\nNOTE: Mining only when screen is locked. Specify -saver=false to mine always."
        )?;
    }
    if config.threads() == 1 {
        writeln!(out, "\nMining with only one thread. Specify -threads=X to use more.")?;
        writeln!(out, "Or use the [i] keyboard command to add threads dynamically.")?;
    }
    if let Some((start, end)) = config.exclude().hours() {
        writeln!(
            out,
            "\nMining will be paused between the hours of {}:00 and {}:00.",
            start, end
        )?;
    }

    writeln!(out, "\nMonitor your mining progress at: {}", STATS_WEBPAGE)?;
    writeln!(out, "\nSend feedback to: {}", FEEDBACK_CONTACT)?;
    writeln!(out, "\n==== Status/Debug output follows ====")?;
    out.flush()
}

/// Print the summary, then echo username and thread count to the log.
///
/// A sink that fails to accept the summary is only worth a warning; startup
/// carries on regardless.
pub fn report_startup<W: Write>(out: &mut W, config: &MinerConfig) {
    if let Err(err) = write_startup_report(out, config) {
        warn!("Could not write startup summary: {}", err);
    }
    info!("Miner username: {}", config.username());
    info!("Threads: {}", config.threads());
}
