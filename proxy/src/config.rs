use std::{env, net::SocketAddr, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

use crate::proxy::{default_rules, ProxyRule};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5173";
pub const DEFAULT_TARGET: &str = "https://graphx-yky3.onrender.com";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub target: Url,
    pub static_dir: PathBuf,
    /// Rewrite the `Host` header to the target authority.
    pub change_origin: bool,
    /// Verify upstream TLS certificates.
    pub verify_tls: bool,
    pub upstream_timeout: Duration,
    pub max_body_bytes: usize,
    pub rules: Vec<ProxyRule>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_raw =
            lookup("PROXY_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw
            .parse()
            .map_err(|err| ConfigError::invalid("PROXY_LISTEN_ADDR", &listen_raw, err))?;

        let target_raw = lookup("PROXY_TARGET").unwrap_or_else(|| DEFAULT_TARGET.to_string());
        let target = Url::parse(&target_raw)
            .map_err(|err| ConfigError::invalid("PROXY_TARGET", &target_raw, err))?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "PROXY_TARGET",
                &target_raw,
                "scheme must be http or https",
            ));
        }

        let static_dir = lookup("PROXY_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let change_origin = parse_bool(&lookup, "PROXY_CHANGE_ORIGIN", true)?;
        let verify_tls = parse_bool(&lookup, "PROXY_VERIFY_TLS", false)?;

        let timeout_secs = parse_number(&lookup, "PROXY_TIMEOUT_SECS", 30u64)?;
        let max_body_bytes = parse_number(&lookup, "PROXY_MAX_BODY_BYTES", 10 * 1024 * 1024)?;

        Ok(Config {
            listen_addr,
            target,
            static_dir,
            change_origin,
            verify_tls,
            upstream_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
            rules: default_rules(),
        })
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::invalid(key, &raw, "expected a boolean")),
        },
    }
}

fn parse_number<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|err| ConfigError::invalid(key, &raw, err)),
    }
}
