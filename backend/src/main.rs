//! Backend entry-point: parses the CLI, loads the session key, seeds the
//! demo dataset, and runs the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use openhome_backend::inbound::http::health::HealthState;
use openhome_backend::server::{
    ServerConfig, create_server, load_session_key, parse_same_site,
};

#[derive(Debug, Parser)]
#[command(name = "openhome-backend", about = "Property marketplace demo backend")]
struct Cli {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// File holding at least 64 bytes of session key material.
    #[arg(long, default_value = "/var/run/secrets/session_key")]
    session_key_file: PathBuf,

    /// Tolerate a missing key file by generating an ephemeral key.
    /// Implied by debug builds; sessions will not survive restarts.
    #[arg(long)]
    allow_ephemeral_key: bool,

    /// Mark session cookies `Secure`. Disable only for plain-HTTP setups.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    cookie_secure: bool,

    /// `SameSite` policy for session cookies: strict, lax, or none.
    #[arg(long, default_value = "lax")]
    same_site: String,

    /// Seed for the deterministic demo dataset.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of generated listings on top of the curated set.
    #[arg(long, default_value_t = 9)]
    generated_listings: usize,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let same_site = parse_same_site(&cli.same_site).ok_or_else(|| {
        std::io::Error::other(format!(
            "invalid --same-site value {:?}; expected strict, lax, or none",
            cli.same_site
        ))
    })?;

    let allow_ephemeral = cli.allow_ephemeral_key || cfg!(debug_assertions);
    let key = load_session_key(&cli.session_key_file, allow_ephemeral)
        .map_err(std::io::Error::other)?;

    let config = ServerConfig::new(key, cli.cookie_secure, same_site, cli.bind)
        .with_demo_dataset(cli.seed, cli.generated_listings);

    let health_state = web::Data::new(HealthState::new());

    // Fail the liveness probe as soon as shutdown starts so orchestrators
    // stop routing traffic while actix drains in-flight connections.
    let draining = health_state.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            draining.mark_unhealthy();
        }
    });

    let server = create_server(health_state, config)?;
    server.await
}
