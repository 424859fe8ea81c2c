//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `PIZZA_HOST` - Bind address (default: 0.0.0.0)
//! - `PIZZA_PORT` - Listen port (default: 8000)
//! - `PIZZA_CONFIRM_MODE` - `widget`, `approve` or `decline` (default: widget)
//! - `PIZZA_CONFIRM_TIMEOUT_SECS` - Seconds to wait for the customer (default: 120)
//! - `PIZZA_CATALOG_PATH` - JSON catalog replacing the built-in menu

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CONFIRM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How checkout obtains the customer's final approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Wait for `POST /confirmation` from the widget.
    Widget,
    AutoApprove,
    AutoDecline,
}

impl FromStr for ConfirmMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "widget" => Ok(Self::Widget),
            "approve" => Ok(Self::AutoApprove),
            "decline" => Ok(Self::AutoDecline),
            other => Err(format!("expected widget, approve or decline, got \"{other}\"")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub confirm_mode: ConfirmMode,
    pub confirm_timeout: Duration,
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            confirm_mode: ConfirmMode::Widget,
            confirm_timeout: Duration::from_secs(DEFAULT_CONFIRM_TIMEOUT_SECS),
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: parse_var(&get, "PIZZA_HOST")?.unwrap_or(defaults.host),
            port: parse_var(&get, "PIZZA_PORT")?.unwrap_or(defaults.port),
            confirm_mode: parse_var(&get, "PIZZA_CONFIRM_MODE")?.unwrap_or(defaults.confirm_mode),
            confirm_timeout: parse_var::<u64, _>(&get, "PIZZA_CONFIRM_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.confirm_timeout),
            catalog_path: get("PIZZA_CATALOG_PATH").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(get: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PIZZA_HOST", "127.0.0.1"),
            ("PIZZA_PORT", "3001"),
            ("PIZZA_CONFIRM_MODE", "Approve"),
            ("PIZZA_CONFIRM_TIMEOUT_SECS", "15"),
            ("PIZZA_CATALOG_PATH", "menu.json"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.confirm_mode, ConfirmMode::AutoApprove);
        assert_eq!(config.confirm_timeout, Duration::from_secs(15));
        assert_eq!(config.catalog_path, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("PIZZA_PORT", "eighty")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZA_PORT"
        ));
        assert!(matches!(
            config(&[("PIZZA_CONFIRM_MODE", "maybe")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZA_CONFIRM_MODE"
        ));
    }
}
