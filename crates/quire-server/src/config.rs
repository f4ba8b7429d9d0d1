use std::env;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown QUIRE_STORE `{0}` (expected `s3` or `memory`)")]
    UnknownStore(String),

    #[error("invalid QUIRE_BIND_ADDR `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("QUIRE_MOUNT_PATH must start with `/`, got `{0}`")]
    InvalidMountPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store: StoreKind,
    pub bucket: String,
    pub bind_addr: SocketAddr,
    /// Prefix the assessment routes are nested under. Empty means the root.
    pub mount_path: String,
    /// Serve through the Lambda runtime instead of a TCP listener.
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("QUIRE_STORE").as_deref() {
            None | Some("s3") => StoreKind::S3,
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        let bucket = lookup("QUIRE_BUCKET").unwrap_or_else(|| "quire".to_string());

        let bind = lookup("QUIRE_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                source,
            })?;

        let mount = lookup("QUIRE_MOUNT_PATH").unwrap_or_else(|| "/api/assessments".to_string());
        if !mount.starts_with('/') {
            return Err(ConfigError::InvalidMountPath(mount));
        }
        let mount_path = mount.trim_end_matches('/').to_string();

        Ok(Self {
            store,
            bucket,
            bind_addr,
            mount_path,
            lambda: lookup("AWS_LAMBDA_FUNCTION_NAME").is_some(),
        })
    }
}
