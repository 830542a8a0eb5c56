//! Database connection configuration

use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the items database.
///
/// Built by the binary from `DB_*` environment variables or flags.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    /// Database name; defaults to the user name when unset.
    pub database: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options from this config.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user);

        if let Some(password) = &self.password {
            options = options.password(password);
        }

        if let Some(database) = &self.database {
            options = options.database(database);
        }

        options
    }

    /// Connection target for log output. Never includes the password.
    pub fn describe(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.user,
            self.host,
            self.port,
            self.database.as_deref().unwrap_or(&self.user)
        )
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn connect_options_carry_settings() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "items".into(),
            password: Some("hunter2".into()),
            database: Some("inventory".into()),
            ..DbConfig::default()
        };

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "items");
        assert_eq!(options.get_database(), Some("inventory"));
    }

    #[test]
    fn describe_defaults_database_to_user() {
        let config = DbConfig {
            user: "items".into(),
            password: Some("hunter2".into()),
            ..DbConfig::default()
        };

        let target = config.describe();
        assert_eq!(target, "postgres://items@localhost:5432/items");
        assert!(!target.contains("hunter2"));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DbConfig {
            password: Some("hunter2".into()),
            ..DbConfig::default()
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
