//! Backend entry-point: wires configuration, persistence, and the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use server::{ApiSettings, ServerConfig};

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

    let settings = ApiSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;
    let id_assignment = settings.id_assignment().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, id_assignment);
    match settings.database_url() {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| std::io::Error::other(format!("create database pool: {err}")))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; todos are stored in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    server.await
}
