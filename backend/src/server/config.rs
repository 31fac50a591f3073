//! Server configuration: layered settings and the resolved config object.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::domain::ports::IdAssignment;
use backend::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration values loaded via OrthoConfig from CLI, env, and file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_API")]
pub struct ApiSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL; todos live in memory when absent.
    pub database_url: Option<String>,
    /// Identifier assignment policy: `core` or `backend`.
    pub id_assignment: Option<String>,
}

impl ApiSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured database URL, if any.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the configured id assignment policy, defaulting to
    /// backend-assigned identifiers.
    pub fn id_assignment(&self) -> Result<IdAssignment, String> {
        self.id_assignment
            .as_deref()
            .map_or(Ok(IdAssignment::default()), str::parse)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) id_assignment: IdAssignment,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from resolved settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, id_assignment: IdAssignment) -> Self {
        Self {
            bind_addr,
            id_assignment,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server stores todos in PostgreSQL; otherwise it
    /// falls back to the in-memory repository.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
