// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/miner/session.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file implements PoolSession, the engine the csminer binary runs by
// default. It logs in to the pool and follows the job feed until the pool
// goes away. Hashing and thread management belong to a full engine and are
// not part of this session.
//
// Tree Location:
// - src/miner/session.rs (pool session engine)
// - Depends on: tokio, tracing, crate::pool

use super::{EngineError, MiningEngine};
use crate::core::config::MinerConfig;
use crate::pool::{
    PoolClient, PoolJob, PoolMessage, StratumProtocol, parse_pool_message, select_endpoint,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Pool login plus job feed, run on a private tokio runtime
#[derive(Clone, Default)]
pub struct PoolSession {
    endpoint: Option<String>,
    pool_client: PoolClient,
}

impl PoolSession {
    /// Session that picks the endpoint from the TLS and dev flags
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pinned to a specific `host:port`
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            pool_client: PoolClient::new(),
        }
    }

    fn endpoint(&self, config: &MinerConfig) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| select_endpoint(config.use_tls(), config.dev()).to_string())
    }

    async fn run_session(&self, config: &MinerConfig) -> Result<(), EngineError> {
        if config.use_tls() {
            return Err(EngineError::TlsUnavailable);
        }

        let endpoint = self.endpoint(config);
        info!("🔌 Connecting to pool at {}", endpoint);
        let stream = self
            .pool_client
            .connect(&endpoint)
            .await
            .map_err(|source| EngineError::Connect {
                endpoint: endpoint.clone(),
                source,
            })?;

        let (reader, mut writer) = stream.into_split();
        let login = StratumProtocol::to_message(StratumProtocol::create_login_request(config));
        writer.write_all(login.as_bytes()).await?;
        writer.flush().await?;
        info!("📤 Sent login request for {}", config.username());

        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!("📨 Raw pool message: {}", line);

            let message = parse_pool_message(line)
                .map_err(|err| EngineError::Protocol(err.to_string()))?;
            match message {
                Some(PoolMessage::LoginAccepted { job }) => {
                    info!("✅ Logged in to pool as {} (rig {})", config.username(), config.rig_id());
                    if let Some(job) = job {
                        self.announce_job(config, &job);
                    }
                }
                Some(PoolMessage::LoginRejected { message }) => {
                    return Err(EngineError::LoginRejected(message));
                }
                Some(PoolMessage::Job(job)) => self.announce_job(config, &job),
                Some(PoolMessage::Error { code, message }) => {
                    warn!("Pool error {}: {}", code, message);
                }
                None => {}
            }
        }

        Err(EngineError::ConnectionClosed)
    }

    fn announce_job(&self, config: &MinerConfig, job: &PoolJob) {
        match job.height {
            Some(height) => info!("📋 New job {} at height {}", job.job_id, height),
            None => info!("📋 New job {}", job.job_id),
        }
        debug!(
            "Job {} target {} algo {}",
            job.job_id,
            job.target,
            job.algo.as_deref().unwrap_or("default")
        );
        if config.saver() && !config.machine_stater().permits_saver_mining() {
            info!("💤 Saver mode: host in use, job held until the screen locks");
        }
    }
}

impl MiningEngine for PoolSession {
    fn run(&self, config: MinerConfig) -> Result<(), EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.run_session(&config))
    }
}
