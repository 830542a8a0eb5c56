//! Startup for the item service
//!
//! Connects the pool, checks the items table, then serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use itemsvc_server::config::{DbConfig, DEFAULT_MAX_CONNECTIONS};
use itemsvc_server::db::{bootstrap, create_pool, PgItemStore, SchemaStatus};
use itemsvc_server::{run_server, AppState, ServerConfig};

/// Listener arguments
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Port to listen on (overrides the port in --bind)
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    /// Effective listen address.
    pub fn bind_addr(&self) -> SocketAddr {
        let mut addr = self.bind;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }
}

/// Database connection arguments
#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database host
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", default_value = "postgres")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database name (defaults to the user name)
    #[arg(long = "db-name", env = "DB_NAME")]
    pub name: Option<String>,

    /// Maximum pooled connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long = "db-acquire-timeout-secs", env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 30)]
    pub acquire_timeout_secs: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            user: args.user,
            password: args.password,
            database: args.name,
            max_connections: args.max_connections,
            acquire_timeout: Duration::from_secs(args.acquire_timeout_secs),
        }
    }
}

/// Run the item service
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = args.bind_addr();
    let db_config = DbConfig::from(args.db);

    tracing::info!(db = %db_config.describe(), "Connecting to database");

    let pool = create_pool(&db_config)
        .await
        .context("Failed to connect to database")?;

    let status = bootstrap(&pool)
        .await
        .context("Failed to connect to database")?;
    if status == SchemaStatus::Degraded {
        tracing::warn!("Items table unavailable; item routes will return 500");
    }

    let state = AppState::new(Arc::new(PgItemStore::new(pool.clone())));

    // Run server (blocks until shutdown)
    run_server(state, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn port_overrides_bind_port() {
        let cli = TestCli::parse_from(["itemsvc", "--bind", "0.0.0.0:3000", "--port", "8080"]);
        assert_eq!(cli.serve.bind_addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn db_flags_become_config() {
        let cli = TestCli::parse_from([
            "itemsvc",
            "--db-host",
            "db.internal",
            "--db-port",
            "6543",
            "--db-user",
            "items",
            "--db-name",
            "inventory",
            "--db-acquire-timeout-secs",
            "5",
        ]);

        let config = DbConfig::from(cli.serve.db);
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "items");
        assert_eq!(config.database.as_deref(), Some("inventory"));
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn malformed_db_port_is_rejected() {
        let result = TestCli::try_parse_from(["itemsvc", "--db-port", "five-four-three-two"]);
        assert!(result.is_err());
    }
}
