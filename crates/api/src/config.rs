use std::net::{IpAddr, SocketAddr};

/// Server configuration loaded from environment variables.
///
/// Defaults match a local development setup: the server listens on
/// `127.0.0.1:5000` and stores data in `db.sqlite` in the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite:db.sqlite`).
    pub database_url: String,
}

/// Raised when an environment variable holds a value that cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite:db.sqlite";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default            |
    /// |----------------|--------------------|
    /// | `HOST`         | `127.0.0.1`        |
    /// | `PORT`         | `5000`             |
    /// | `DATABASE_URL` | `sqlite:db.sqlite` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let host = raw_host
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "HOST",
                value: raw_host.clone(),
                reason: e.to_string(),
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    /// Socket address to bind the listener to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, "sqlite:db.sqlite");
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite:/var/lib/cinedex/movies.sqlite"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite:/var/lib/cinedex/movies.sqlite");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("PORT", "fivethousand")]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("HOST", "not an ip")]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "HOST", .. }));
    }
}
