//! CLI configuration: flags with environment fallbacks.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8080";

/// Where the product API lives and how long to wait for it.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// API base path, absolute (`http://host/api`) or relative (`/api`)
    #[arg(long, env = "SHOWCASE_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Origin used to resolve a relative base path
    #[arg(long, env = "SHOWCASE_ORIGIN", default_value = DEFAULT_ORIGIN, global = true)]
    pub origin: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SHOWCASE_TIMEOUT_SECS", default_value_t = 10, global = true)]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base URL must not be empty");
        }
        if self.base_url.starts_with('/') && !self.origin.starts_with("http") {
            bail!("relative base URL {} needs an http(s) origin, got {:?}", self.base_url, self.origin);
        }
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
