use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasklight_core::TodoService;
use tasklight_server::config::ServerConfig;
use tasklight_server::server::build_router;

#[derive(Parser)]
#[command(name = "tasklight")]
#[command(about = "In-memory todo tracking API", long_about = None)]
struct Cli {
    /// Address to listen on (defaults to 127.0.0.1:3000)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tasklight_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut cfg = ServerConfig::default();
    if let Some(addr) = cli.addr {
        cfg.bind_addr = addr;
    }

    let todos = Arc::new(Mutex::new(TodoService::new()));
    let app = build_router(todos);

    tracing::info!("Listening on {}", cfg.bind_addr);
    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    axum::serve(listener, app)
        .await
        .context("server exited with an error")?;

    Ok(())
}
