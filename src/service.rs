//! Backing TIDAL service lifecycle.
//!
//! The MCP process can optionally own the backing service: when `TIDAL_API_CMD`
//! is set, [`ApiProcess::spawn`] launches it as a child process and waits until
//! its port accepts connections. The guard kills the child on drop, so the
//! backing service never outlives the MCP server regardless of how the process
//! exits.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::net::TcpStream;
use tokio::process::{Child, Command};

const READY_TIMEOUT: Duration = Duration::from_secs(30);
const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Scoped handle to a spawned backing-service process.
pub struct ApiProcess {
    child: Child,
}

impl ApiProcess {
    /// Spawn `command` (split on whitespace) and wait until the host:port part
    /// of `api_url` accepts TCP connections.
    pub async fn spawn(command: &str, api_url: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .context("TIDAL_API_CMD is empty")?;

        tracing::info!("Starting backing TIDAL service: {}", command);

        let child = Command::new(program)
            .args(parts)
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start backing service: {}", command))?;

        let process = Self { child };
        process.wait_until_ready(api_url).await?;
        tracing::info!("Backing TIDAL service is ready at {}", api_url);

        Ok(process)
    }

    async fn wait_until_ready(&self, api_url: &str) -> Result<()> {
        let addr = host_port(api_url)?;
        let deadline = tokio::time::Instant::now() + READY_TIMEOUT;

        loop {
            if TcpStream::connect(&addr).await.is_ok() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                anyhow::bail!(
                    "Backing service did not become ready at {} within {:?}",
                    addr,
                    READY_TIMEOUT
                );
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    }

    /// Terminate the child and wait for it to exit.
    pub async fn shutdown(mut self) -> Result<()> {
        tracing::info!("Stopping backing TIDAL service");
        self.child.start_kill().ok();
        self.child.wait().await?;
        Ok(())
    }
}

/// Extract `host:port` from a base URL like `http://127.0.0.1:5050`.
fn host_port(api_url: &str) -> Result<String> {
    let stripped = api_url
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    let host = stripped.split('/').next().unwrap_or(stripped);
    if host.is_empty() {
        anyhow::bail!("Cannot extract host from URL: {}", api_url);
    }
    Ok(host.to_string())
}
