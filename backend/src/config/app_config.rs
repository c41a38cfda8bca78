use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin. Any origin is accepted when unset.
    pub frontend_url: Option<String>,
    /// Built frontend to serve for every non-API path.
    pub static_dir: Option<PathBuf>,
    pub environment: String,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        Ok(AppConfig {
            bind_addr,
            frontend_url: value("FRONTEND_URL"),
            static_dir: value("STATIC_DIR").map(PathBuf::from),
            environment: value("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            sentry_dsn: value("SENTRY_DSN"),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_url: None,
            static_dir: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            sentry_dsn: None,
        }
    }
}
