//! Database configuration
//!
//! Loaded once at startup (see `cafe-cli`), checked with
//! [`DbConfig::validate`], then shared read-only with every component.

use std::fmt;
use std::time::Duration;

/// Longest identifier MySQL accepts for a database name.
const MAX_DATABASE_NAME_LEN: usize = 64;

/// Connection settings for the MySQL instance holding the `orders` table
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    /// Database created by the schema bootstrap and used by every request
    pub database: String,
    pub user: String,
    pub password: String,
    /// Upper bound on connection establishment; `None` waits indefinitely
    pub connect_timeout: Option<Duration>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            database: "cafe_db".to_string(),
            user: "root".to_string(),
            password: String::new(),
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}

// Hand-written so the password never reaches logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Configuration rejected by [`DbConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("database host cannot be empty")]
    EmptyHost,

    #[error("database user cannot be empty")]
    EmptyUser,

    #[error("database port cannot be 0")]
    ZeroPort,

    #[error("invalid database name '{name}': {reason}")]
    InvalidDatabaseName { name: String, reason: &'static str },
}

impl DbConfig {
    /// Check the settings before anything connects.
    ///
    /// The database name ends up quoted inside `CREATE DATABASE` and `USE`,
    /// which cannot take bind parameters, so only plain identifier
    /// characters are allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::EmptyUser);
        }
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        validate_database_name(&self.database)
    }
}

fn validate_database_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidDatabaseName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if name.len() > MAX_DATABASE_NAME_LEN {
        return Err(invalid("exceeds 64 characters"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        return Err(invalid("only ASCII letters, digits, '_' and '$' are allowed"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DbConfig::default();
        assert_eq!(config.database, "cafe_db");
        assert_eq!(config.port, 3306);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_host_and_user() {
        let config = DbConfig {
            host: "  ".into(),
            ..DbConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyHost));

        let config = DbConfig {
            user: String::new(),
            ..DbConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyUser));
    }

    #[test]
    fn rejects_zero_port() {
        let config = DbConfig {
            port: 0,
            ..DbConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPort));
    }

    #[test]
    fn rejects_unsafe_database_names() {
        for name in ["", "cafe db", "cafe`; DROP DATABASE mysql; --", "café"] {
            let config = DbConfig {
                database: name.into(),
                ..DbConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidDatabaseName { .. })),
                "accepted {name:?}"
            );
        }

        let config = DbConfig {
            database: "x".repeat(65),
            ..DbConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_identifier_names() {
        let config = DbConfig {
            database: "cafe_test_$1".into(),
            ..DbConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig {
            password: "basededados".into(),
            ..DbConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("basededados"));
        assert!(rendered.contains("<redacted>"));
    }
}
