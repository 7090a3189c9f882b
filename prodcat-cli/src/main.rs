//! prodcat - product catalog HTTP API server
//!
//! Reads database credentials from the environment (`APP_DB_USERNAME`,
//! `APP_DB_PASSWORD`, `APP_DB_NAME`), bootstraps the schema, and serves
//! the CRUD routes until shutdown.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

use prodcat_core::DbConfig;
use prodcat_server::db::{create_pool, ensure_schema};
use prodcat_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "prodcat", version, about = "Product catalog HTTP API")]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8010")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Database URL (overrides the APP_DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let cli = Cli::parse();

    // A full DATABASE_URL wins; otherwise assemble one from APP_DB_*
    let database_url = match cli.database_url {
        Some(url) => url,
        None => DbConfig::from_env()
            .context("Set DATABASE_URL or the APP_DB_USERNAME/APP_DB_PASSWORD/APP_DB_NAME variables")?
            .url(),
    };

    tracing::info!("Starting prodcat server on {}", cli.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Refusing to serve against a missing table: schema failure is fatal
    ensure_schema(&pool)
        .await
        .context("Failed to initialize products schema")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
