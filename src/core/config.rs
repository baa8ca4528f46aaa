// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/config.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file defines MinerConfig, the read-only record handed to the mining
// engine once all options have been validated.
//
// Tree Location:
// - src/core/config.rs (engine configuration)
// - Depends on: std, crate::core, crate::miner

use crate::core::exclude::ExcludeWindow;
use crate::core::types::Options;
use crate::miner::MachineStater;
use std::fmt;
use std::sync::Arc;

/// Validated run configuration. Fields are only readable after assembly.
#[derive(Clone)]
pub struct MinerConfig {
    threads: usize,
    username: String,
    rig_id: String,
    wallet: String,
    agent: String,
    saver: bool,
    exclude: ExcludeWindow,
    use_tls: bool,
    advanced_config: String,
    dev: bool,
    machine_stater: Arc<dyn MachineStater>,
}

impl MinerConfig {
    /// Map parsed options and the resolved exclude window into the engine record
    pub fn assemble(
        options: Options,
        exclude: ExcludeWindow,
        machine_stater: Arc<dyn MachineStater>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            threads: options.threads,
            username: options.user,
            rig_id: options.rigid,
            wallet: options.wallet,
            agent: agent.into(),
            saver: options.saver,
            exclude,
            use_tls: options.tls,
            advanced_config: options.config,
            dev: options.dev,
            machine_stater,
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn rig_id(&self) -> &str {
        &self.rig_id
    }

    /// Empty unless the operator is creating a username or making a secure config change
    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn saver(&self) -> bool {
        self.saver
    }

    pub fn exclude(&self) -> ExcludeWindow {
        self.exclude
    }

    pub fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// Pool-interpreted option string, e.g. "start_diff=1000;donate=1.0"
    pub fn advanced_config(&self) -> &str {
        &self.advanced_config
    }

    pub fn dev(&self) -> bool {
        self.dev
    }

    pub fn machine_stater(&self) -> &Arc<dyn MachineStater> {
        &self.machine_stater
    }
}

impl fmt::Debug for MinerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinerConfig")
            .field("threads", &self.threads)
            .field("username", &self.username)
            .field("rig_id", &self.rig_id)
            .field("wallet", &self.wallet)
            .field("agent", &self.agent)
            .field("saver", &self.saver)
            .field("exclude", &self.exclude)
            .field("use_tls", &self.use_tls)
            .field("advanced_config", &self.advanced_config)
            .field("dev", &self.dev)
            .finish_non_exhaustive()
    }
}
