//! Server configuration loaded from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::directions::DirectionsConfig;
use crate::domain::ApiKey;

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No API key and no mock file to fall back on
    #[error("GOOGLE_API_KEY is not set (set DIRECTIONS_MOCK_FILE to run without it)")]
    MissingApiKey,

    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directions provider credentials
    pub api_key: ApiKey,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Outbound client settings
    pub directions: DirectionsConfig,
    /// Serve this payload file instead of calling the provider
    pub mock_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a config with the given key and defaults for everything else.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            directions: DirectionsConfig::default(),
            mock_file: None,
        }
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the outbound client settings.
    pub fn with_directions(mut self, directions: DirectionsConfig) -> Self {
        self.directions = directions;
        self
    }

    /// Serve a canned payload instead of calling the provider.
    pub fn with_mock_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.mock_file = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mock_file = get("DIRECTIONS_MOCK_FILE").map(PathBuf::from);

        let api_key = match get("GOOGLE_API_KEY") {
            Some(key) => ApiKey::new(key),
            None if mock_file.is_some() => ApiKey::new(""),
            None => return Err(ConfigError::MissingApiKey),
        };

        let host: IpAddr = match get("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port: u16 = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let mut directions = DirectionsConfig::default();
        if let Some(url) = get("DIRECTIONS_BASE_URL") {
            directions = directions.with_base_url(url);
        }
        if let Some(value) = get("DIRECTIONS_TIMEOUT_SECS") {
            let secs = match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DIRECTIONS_TIMEOUT_SECS",
                        value,
                    });
                }
            };
            directions = directions.with_timeout(secs);
        }

        Ok(Self {
            api_key,
            bind_addr: SocketAddr::new(host, port),
            directions,
            mock_file,
        })
    }
}
