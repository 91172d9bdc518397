use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/version.json";
const DEFAULT_RELOAD_DELAY_MS: u64 = 1500;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SESSION_TTL_MINUTES: u64 = 12 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("STORE_URL is not set")]
    MissingStoreUrl,
    #[error("STORE_URL is not an http(s) URL: {0}")]
    InvalidStoreUrl(String),
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub store_url: Url,
    pub data_path: PathBuf,
    pub reload_delay: Duration,
    pub store_timeout: Duration,
    pub session_ttl: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("STORE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingStoreUrl)?;
        let store_url = Url::parse(&raw_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidStoreUrl(raw_url.clone()))?;

        let port = number(&lookup, "PORT", u64::from(DEFAULT_PORT))?;
        let port = u16::try_from(port).map_err(|_| ConfigError::InvalidNumber {
            name: "PORT",
            value: port.to_string(),
        })?;

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            port,
            store_url,
            data_path,
            reload_delay: Duration::from_millis(number(
                &lookup,
                "RELOAD_DELAY_MS",
                DEFAULT_RELOAD_DELAY_MS,
            )?),
            store_timeout: Duration::from_secs(number(
                &lookup,
                "STORE_TIMEOUT_SECS",
                DEFAULT_STORE_TIMEOUT_SECS,
            )?),
            session_ttl: Duration::from_secs(
                number(&lookup, "SESSION_TTL_MINUTES", DEFAULT_SESSION_TTL_MINUTES)?
                    .saturating_mul(60),
            ),
        })
    }
}

fn number(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
