use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("invalid DATABASE_URL {value:?}: {reason}")]
    InvalidDatabaseUrl { value: String, reason: &'static str },
}

/// Where templates are persisted, parsed from `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `memory://`
    Memory,
    /// `s3://<bucket>[/<prefix>]`
    S3 { bucket: String, prefix: String },
}

impl FromStr for DatabaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigError::InvalidDatabaseUrl {
            value: s.to_string(),
            reason,
        };

        if s == "memory://" || s == "memory" {
            return Ok(DatabaseUrl::Memory);
        }

        let rest = s
            .strip_prefix("s3://")
            .ok_or_else(|| invalid("expected s3://<bucket>[/<prefix>] or memory://"))?;
        let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(invalid("bucket name is empty"));
        }

        Ok(DatabaseUrl::S3 {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        })
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// The single origin allowed to make credentialed cross-origin requests.
    pub client_url: Option<String>,
    pub database_url: DatabaseUrl,
    /// Override for S3-compatible servers.
    pub s3_endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidPort {
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = match non_empty("DATABASE_URL") {
            Some(value) => value.trim().parse()?,
            None => DatabaseUrl::Memory,
        };

        Ok(Self {
            port,
            client_url: non_empty("CLIENT_URL"),
            database_url,
            s3_endpoint_url: non_empty("S3_ENDPOINT_URL"),
        })
    }
}
