//! Daemon settings: `bandservice.toml`, then `BANDSERVICE_*` variables.
//!
//! The file is optional and every key has a default, so a bare
//! `bandserviced` listens on `0.0.0.0:8080` with a local `bandservice.db`.

use std::time::Duration;

use serde::Deserialize;

/// Everything `bandserviced` needs to start.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub users: UsersConfig,
}

/// `[server]`: where the band API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Must be non-zero.
    pub port: u16,
}

/// `[database]`: the `SQLite` file holding the `bands` table.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx URL; `sqlite::memory:` keeps bands for the process lifetime only.
    pub url: String,
}

/// `[logging]`: `tracing` filter for the daemon and its adapters.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

/// User service configuration for the `/bands/bb/{id}` pass-through.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Base URL; users are fetched from `{base_url}/api/users/{id}`.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Read `bandservice.toml` from the working directory, apply the
    /// `BANDSERVICE_*` and `RUST_LOG` overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unreadable or malformed file, or for a
    /// zero port, an empty user-service URL or a zero timeout.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("bandservice.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("BANDSERVICE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("BANDSERVICE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("BANDSERVICE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("BANDSERVICE_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("BANDSERVICE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("BANDSERVICE_USERS_URL") {
            self.users.base_url = val;
        }
        if let Some(secs) = var("BANDSERVICE_USERS_TIMEOUT_SECS").and_then(|val| val.parse().ok())
        {
            self.users.timeout_secs = secs;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.users.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "users.base_url must not be empty".to_string(),
            ));
        }
        if self.users.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "users.timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` handed to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Bound for one call to the user service.
    #[must_use]
    pub fn users_timeout(&self) -> Duration {
        Duration::from_secs(self.users.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:bandservice.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bandserviced=info,bandservice=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mafias-user-service-app.herokuapp.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Why `bandserviced` refused to start.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bandservice.toml is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("bandservice.toml could not be read")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite:bandservice.db?mode=rwc");
        assert_eq!(config.users.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [users]
            base_url = 'http://users.local'
            timeout_secs = 3
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.users.base_url, "http://users.local");
        assert_eq!(config.users_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_users_url() {
        let mut config = Config::default();
        config.users.base_url = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_users_timeout() {
        let mut config = Config::default();
        config.users.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("BANDSERVICE_BIND", "127.0.0.1:7000"),
            ("BANDSERVICE_DATABASE_URL", "sqlite::memory:"),
            ("BANDSERVICE_USERS_URL", "http://users.test"),
            ("BANDSERVICE_USERS_TIMEOUT_SECS", "2"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:7000");
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.users.base_url, "http://users.test");
        assert_eq!(config.users.timeout_secs, 2);
    }

    #[test]
    fn should_prefer_rust_log_over_service_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("BANDSERVICE_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("BANDSERVICE_PORT", "http")]));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8081
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:bandservice.db?mode=rwc");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
