//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

use crate::cache::CacheConfig;
use crate::listing::ListingConfig;
use crate::upstream::ApiConfig;

/// Error reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub listing: ListingConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let endpoint = required("API_ENDPOINT")?;
        let client_id = required("CLIENT_ID")?;
        let client_secret = required("CLIENT_SECRET")?;

        let timeout = parsed(&var, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let api = ApiConfig::new(client_id, client_secret)
            .with_base_url(endpoint)
            .with_timeout(timeout);

        let defaults = ListingConfig::default();
        let listing = ListingConfig::new(
            parsed(&var, "PAGE_SIZE", defaults.page_size)?,
            parsed(&var, "SCAN_BATCH_SIZE", defaults.batch_size)?,
            defaults.window,
        );

        let cache = CacheConfig::default().with_ttl_secs(parsed(&var, "CACHE_TTL_SECS", 3600u64)?);

        Ok(Self {
            bind_addr: parsed(&var, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            api,
            cache,
            listing,
        })
    }
}

fn parsed<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match var(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
