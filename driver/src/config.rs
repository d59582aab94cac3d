use std::net::SocketAddr;
use std::path::PathBuf;

use vodca::References;

use crate::env;
use crate::error::DriverError;

static BIND_ADDR: &str = "LIBRARY_BIND_ADDR";
static LOG_DIR: &str = "LIBRARY_LOG_DIR";

static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
static DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct ServerConfig {
    bind: SocketAddr,
    log_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment, a `.env` file included.
    pub fn from_env() -> Result<Self, DriverError> {
        Self::from_values(optional_env(BIND_ADDR)?, optional_env(LOG_DIR)?)
    }

    pub fn from_values(
        bind: Option<String>,
        log_dir: Option<String>,
    ) -> Result<Self, DriverError> {
        let bind = bind.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .map_err(|_| DriverError::Config {
                key: BIND_ADDR,
                value: bind.clone(),
            })?;

        let log_dir = log_dir.unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());
        if log_dir.trim().is_empty() {
            return Err(DriverError::Config {
                key: LOG_DIR,
                value: log_dir,
            });
        }

        Ok(Self {
            bind,
            log_dir: PathBuf::from(log_dir),
        })
    }
}

fn optional_env(key: &str) -> Result<Option<String>, DriverError> {
    match env(key) {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_missing_env() => Ok(None),
        Err(error) => Err(error),
    }
}
