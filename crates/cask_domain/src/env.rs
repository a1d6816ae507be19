use std::path::PathBuf;
use std::time::Duration;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "tcp://127.0.0.1:2375";
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Setters, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration the completion helper runs with.
pub struct Environment {
    /// Address of the container engine API.
    pub host: Url,
    /// Upper bound for a single engine lookup.
    pub lookup_timeout: Duration,
    /// Offer container IDs next to container names.
    pub show_container_ids: bool,
    /// The base path relative to which everything else is stored.
    pub base_path: PathBuf,
}

impl Environment {
    pub fn new(host: Url, base_path: PathBuf) -> Self {
        Self {
            host,
            lookup_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            show_container_ids: false,
            base_path,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.base_path.join("logs")
    }

    /// HTTP base URL for the engine API. `tcp://` hosts are spoken to over
    /// plain HTTP.
    pub fn engine_url(&self) -> Result<Url> {
        match self.host.scheme() {
            "http" | "https" => Ok(self.host.clone()),
            "tcp" => {
                let rewritten = self.host.as_str().replacen("tcp://", "http://", 1);
                Url::parse(&rewritten).map_err(|e| Error::InvalidHost(rewritten, e))
            }
            scheme => Err(Error::UnsupportedScheme(scheme.to_string())),
        }
    }

    pub fn parse_host(value: &str) -> Result<Url> {
        Url::parse(value.trim()).map_err(|e| Error::InvalidHost(value.to_string(), e))
    }

    pub fn parse_timeout(value: &str) -> Result<Duration> {
        match value.trim().parse::<u64>() {
            Ok(0) => Err(Error::NonPositiveTimeout),
            Ok(ms) => Ok(Duration::from_millis(ms)),
            Err(_) => Err(Error::MalformedTimeout(value.to_string())),
        }
    }

    /// `None` for values that are neither a recognised yes nor no.
    pub fn parse_flag(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" => Some(true),
            "" | "0" | "no" | "false" => Some(false),
            _ => None,
        }
    }
}

/// Resolves the [`Environment`] for the current process.
pub trait EnvironmentService: Send + Sync {
    fn get_environment(&self) -> Result<Environment>;
}
