//! HTTP server exposing the car auction fee calculator.
//!
//! You can run the server using the following command:
//! ```shell
//! RUST_LOG=info cargo run --release --bin server -- --port 8000
//! ```
//! and query it with
//! ```shell
//! curl "http://127.0.0.1:8000/api/calculate?budget=1000"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[path = "../lib/api.rs"]
mod api;
#[path = "../lib/logger.rs"]
mod logger;

/// The arguments for the server.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[clap(long, env = "CARAUCTION_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[clap(long, env = "CARAUCTION_PORT", default_value = "8000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment and defaults still apply.
    dotenvy::dotenv().ok();

    // Setup the logger.
    logger::setup_logger();

    // Parse the command line arguments.
    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "car auction fee calculator listening");

    axum::serve(listener, api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
