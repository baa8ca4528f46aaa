// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/launcher.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file sequences a csminer run: parse options, resolve the exclude
// window, assemble the configuration, print the startup report and hand over
// to the engine. Nothing here exits the process; failures are returned to
// main.rs.
//
// Tree Location:
// - src/launcher.rs (run orchestration)
// - Depends on: num_cpus, tracing, crate::core, crate::help, crate::miner

use crate::core::{ExcludeError, ExcludeWindow, LaunchError, MinerConfig, Options};
use crate::help::report_startup;
use crate::miner::{MachineStater, MiningEngine};
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, warn};

/// Validate parsed options and build the engine configuration
pub fn prepare(
    options: Options,
    machine_stater: Arc<dyn MachineStater>,
    agent: &str,
) -> Result<MinerConfig, ExcludeError> {
    let exclude = ExcludeWindow::parse(&options.exclude)?;
    Ok(MinerConfig::assemble(options, exclude, machine_stater, agent))
}

/// Run csminer with the given argument vector (program name first).
///
/// The startup report goes to `out`; `engine.run` is the last thing called,
/// so nothing is written after the engine returns.
pub fn launch<I, T, E, W>(
    args: I,
    machine_stater: Arc<dyn MachineStater>,
    agent: &str,
    engine: &E,
    out: &mut W,
) -> Result<(), LaunchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    E: MiningEngine + ?Sized,
    W: Write,
{
    let options = Options::try_parse_args(args)?;
    let config = prepare(options, machine_stater, agent)?;

    report_startup(out, &config);

    let cpus = num_cpus::get();
    if config.threads() > cpus {
        warn!(
            "Requested {} threads but only {} logical CPUs are available",
            config.threads(),
            cpus
        );
    }
    debug!("Engine configuration: {:?}", config);

    engine.run(config)?;
    Ok(())
}
