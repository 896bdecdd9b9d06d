use mcp_tidal::server::TidalMcpServer;
use mcp_tidal::service::ApiProcess;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let api_url =
        env::var("TIDAL_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5050".to_string());

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    // Optionally own the backing service process. The guard kills the child
    // on every exit path, so a crashed MCP server never leaks it.
    let api_process = match env::var("TIDAL_API_CMD") {
        Ok(cmd) if !cmd.trim().is_empty() => Some(ApiProcess::spawn(&cmd, &api_url).await?),
        _ => None,
    };

    // Probe the backing service's session. Not being logged in is fine at
    // startup; the tidal_login tool handles it later.
    let server = TidalMcpServer::new(api_url.clone());
    match server.client().auth_status().await {
        Ok(status) if status.authenticated => {
            tracing::info!("TIDAL session is active");
        }
        Ok(_) => {
            tracing::warn!("No active TIDAL session; use the tidal_login tool to authenticate");
        }
        Err(e) => {
            tracing::error!("Cannot reach backing TIDAL service at {}: {}", api_url, e);
            tracing::error!("Please verify:");
            tracing::error!("  - TIDAL_API_URL is correct: {}", api_url);
            tracing::error!("  - The backing TIDAL service is running and accessible");
            std::process::exit(1);
        }
    }

    // Create server configuration and start SSE server
    let config = SseServerConfig {
        bind: bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("TIDAL MCP Server listening on {}", config.bind);

    // serve_with_config handles binding, axum server setup, and graceful shutdown internally
    let sse_server = SseServer::serve_with_config(config).await?;

    let api_url_clone = api_url.clone();
    let ct = sse_server.with_service(move || TidalMcpServer::new(api_url_clone.clone()));

    tracing::info!("TIDAL MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    if let Some(process) = api_process {
        process.shutdown().await?;
    }

    Ok(())
}
