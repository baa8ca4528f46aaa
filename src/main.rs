// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// Process entry point for the csminer binary. It sets up logging, picks the
// host-state provider and engine, and is the only place that terminates the
// process.
//
// Tree Location:
// - src/main.rs (binary entry point)
// - Depends on: csminer, tracing-subscriber

use csminer::{
    LaunchError, MachineStater, PoolSession, launch, miner::FixedMachineState,
    utils::user_agent,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // No screen-lock probe on this platform build
    let machine_stater: Arc<dyn MachineStater> = Arc::new(FixedMachineState::active());
    let engine = PoolSession::new();

    let result = launch(
        std::env::args_os(),
        machine_stater,
        &user_agent(),
        &engine,
        &mut std::io::stdout(),
    );

    match result {
        Ok(()) => {}
        Err(LaunchError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("❌ Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}
