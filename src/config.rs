//! Server configuration
//!
//! Read from environment variables with local-development defaults:
//!
//! | variable              | default   |
//! |-----------------------|-----------|
//! | `DATA_DIR`            | `data`    |
//! | `PORT`                | `3000`    |
//! | `DEFAULT_LIMIT`       | `12`      |
//! | `MAX_LIMIT`           | `100`     |
//! | `MAX_BATCH_SPACES`    | `50`      |
//! | `PROVIDER_TIMEOUT_MS` | `8000`    |
//! | `CACHE_TTL_SECS`      | `300`     |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::ranking::DEFAULT_LIMIT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory holding `catalog.json` and `spaces.json`
    pub data_dir: PathBuf,
    pub port: u16,
    /// Suggestions returned when the request gives no limit
    pub default_limit: usize,
    /// Hard cap on requested limits
    pub max_limit: usize,
    /// Most space ids one batch request may name
    pub max_batch_spaces: usize,
    pub provider_timeout_ms: u64,
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            port: 3000,
            default_limit: DEFAULT_LIMIT,
            max_limit: 100,
            max_batch_spaces: 50,
            provider_timeout_ms: 8_000,
            cache_ttl_secs: 300,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        fn parsed<T: FromStr>(value: Option<String>, default: T) -> T {
            value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        }

        let max_limit = parsed(lookup("MAX_LIMIT"), defaults.max_limit).max(1);

        Self {
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            port: parsed(lookup("PORT"), defaults.port),
            default_limit: parsed(lookup("DEFAULT_LIMIT"), defaults.default_limit).min(max_limit),
            max_limit,
            max_batch_spaces: parsed(lookup("MAX_BATCH_SPACES"), defaults.max_batch_spaces).max(1),
            provider_timeout_ms: parsed(lookup("PROVIDER_TIMEOUT_MS"), defaults.provider_timeout_ms),
            cache_ttl_secs: parsed(lookup("CACHE_TTL_SECS"), defaults.cache_ttl_secs),
        }
    }

    /// Requested limit, defaulted and capped
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}
