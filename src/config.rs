//! Process configuration read from environment variables.
//!
//! | Variable             | Default      |
//! |----------------------|--------------|
//! | `STORAGE_MODE`       | `in_memory`  |
//! | `DATABASE_URL`       | required for `postgres` |
//! | `DATABASE_POOL_SIZE` | `10`         |
//! | `HOST`               | `0.0.0.0`    |
//! | `PORT`               | `5000`       |
//! | `IDENTITY_HEADER`    | `x-user-id`  |
//! | `ANONYMOUS_ACCESS`   | `unscoped`   |
//! | `LOG_FORMAT`         | `text`       |

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::api::identity::DEFAULT_IDENTITY_HEADER;
use crate::telemetry::LogFormat;
use crate::todo::services::AnonymousAccess;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `STORAGE_MODE` is not recognised.
    #[error("invalid STORAGE_MODE '{0}', expected 'in_memory' or 'postgres'")]
    InvalidStorageMode(String),

    /// `STORAGE_MODE=postgres` without `DATABASE_URL`.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// A variable holds a value that does not parse.
    #[error("invalid {variable} '{value}': {reason}")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure description.
        reason: String,
    },
}

/// Where todos are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageConfig {
    /// Process-local storage, lost on exit.
    #[default]
    InMemory,
    /// `PostgreSQL` via a connection pool.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pool size.
        pool_size: u32,
    },
}

impl StorageConfig {
    /// Returns the `STORAGE_MODE` value naming this backend.
    #[must_use]
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::InMemory => "in_memory",
            Self::Postgres { .. } => "postgres",
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Persistence backend.
    pub storage: StorageConfig,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Header carrying the caller identity.
    pub identity_header: HeaderName,
    /// Treatment of calls without a caller identity.
    pub anonymous_access: AnonymousAccess,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            identity_header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
            anonymous_access: AnonymousAccess::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or a required one
    /// is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or a required one
    /// is missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let storage_mode = read("STORAGE_MODE").map(|value| value.to_ascii_lowercase());
        let storage = match storage_mode.as_deref() {
            None | Some("in_memory" | "inmemory" | "memory") => StorageConfig::InMemory,
            Some("postgres" | "postgresql" | "pg") => StorageConfig::Postgres {
                database_url: read("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                pool_size: parse_or(
                    "DATABASE_POOL_SIZE",
                    read("DATABASE_POOL_SIZE"),
                    DEFAULT_POOL_SIZE,
                )?,
            },
            Some(other) => return Err(ConfigError::InvalidStorageMode(other.to_owned())),
        };

        Ok(Self {
            storage,
            host: read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or("PORT", read("PORT"), DEFAULT_PORT)?,
            identity_header: parse_or(
                "IDENTITY_HEADER",
                read("IDENTITY_HEADER").map(|value| value.to_ascii_lowercase()),
                HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
            )?,
            anonymous_access: parse_or(
                "ANONYMOUS_ACCESS",
                read("ANONYMOUS_ACCESS"),
                AnonymousAccess::default(),
            )?,
            log_format: parse_or("LOG_FORMAT", read("LOG_FORMAT"), LogFormat::default())?,
        })
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `HOST` is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|err: std::net::AddrParseError| ConfigError::InvalidValue {
            variable: "HOST",
            value: self.host.clone(),
            reason: err.to_string(),
        })
    }
}

fn parse_or<T>(variable: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(err) => Err(ConfigError::InvalidValue {
            variable,
            reason: err.to_string(),
            value,
        }),
    }
}
