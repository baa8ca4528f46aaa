// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file implements the TCP client used to reach the pool, for both IP and
// hostname endpoints.
//
// Tree Location:
// - src/pool/client.rs (pool TCP client logic)
// - Depends on: tokio, std

use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpStream, lookup_host};

/// Pool client for managing TCP connections to the mining pool
#[derive(Clone, Default)]
pub struct PoolClient;

impl PoolClient {
    pub fn new() -> Self {
        Self
    }

    /// Resolve pool address from either IP:port or domain:port format
    async fn resolve_pool_address(pool_str: &str) -> io::Result<SocketAddr> {
        if let Ok(addr) = pool_str.parse::<SocketAddr>() {
            return Ok(addr);
        }

        lookup_host(pool_str).await?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {}", pool_str),
            )
        })
    }

    /// Connect to the mining pool at the specified address (supports both IP and domain)
    pub async fn connect(&self, pool_address: &str) -> io::Result<TcpStream> {
        let resolved_addr = Self::resolve_pool_address(pool_address).await?;
        let stream = TcpStream::connect(resolved_addr).await?;
        stream.set_nodelay(true)?; // Disable Nagle's algorithm for low latency
        Ok(stream)
    }
}

// Changelog:
// - v0.3.3: Errors are plain io::Error so the session can attach the endpoint.
//   - Merged connect/connect_str into a single string-based connect.
