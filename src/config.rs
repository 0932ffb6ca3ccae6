//! Service configuration, read once from the environment at startup.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GEMINI_API_KEY` | keyring entry `chat2vis-ai` / `gemini` |
//! | `GEMINI_MODEL` | `gemini-2.5-flash` |
//! | `GEMINI_TEMPERATURE` | `0.3` |
//! | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
//! | `ANIMATION_GUIDE_PATH` | `animation_engine_guide.txt` |
//! | `CHAT2VIS_BIND_ADDR` | `127.0.0.1:5001` |
//! | `CHAT2VIS_HTTP_TIMEOUT_SECS` | `60` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use keyring::Entry;
use url::Url;

use crate::drivers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::error::{Error, ErrorContext};
use crate::Result;

pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_GUIDE_PATH: &str = "animation_engine_guide.txt";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

const KEYRING_SERVICE: &str = "chat2vis-ai";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub base_url: Url,
    pub guide_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub http_timeout: Duration,
}

impl ServiceConfig {
    /// Built-in defaults, no API key.
    pub fn new() -> Result<Self> {
        Ok(Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            guide_path: PathBuf::from(DEFAULT_GUIDE_PATH),
            bind_addr: parse_bind_addr(DEFAULT_BIND_ADDR)?,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Defaults overridden by environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new()?;

        config.api_key = env_string("GEMINI_API_KEY").or_else(|| keyring_api_key("gemini"));

        if let Some(model) = env_string("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(t) = env_string("GEMINI_TEMPERATURE").and_then(|s| s.parse::<f64>().ok()) {
            config.temperature = t;
        }
        if let Some(url) = env_string("GEMINI_BASE_URL") {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(path) = env_string("ANIMATION_GUIDE_PATH") {
            config.guide_path = PathBuf::from(path);
        }
        if let Some(addr) = env_string("CHAT2VIS_BIND_ADDR") {
            config.bind_addr = parse_bind_addr(&addr)?;
        }
        if let Some(secs) = env_string("CHAT2VIS_HTTP_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok()) {
            config.http_timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }

    pub fn with_guide_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.guide_path = path.into();
        self
    }

    /// The API key, or a configuration error naming where it is looked up.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::configuration_with_context(
                "Gemini API key is not configured",
                ErrorContext::new()
                    .with_field_path("GEMINI_API_KEY")
                    .with_details(format!("set the variable or a keyring entry '{}'/'gemini'", KEYRING_SERVICE))
                    .with_source("config"),
            )
        })
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn keyring_api_key(provider: &str) -> Option<String> {
    Entry::new(KEYRING_SERVICE, provider)
        .ok()
        .and_then(|entry| entry.get_password().ok())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid base URL: {}", e),
            ErrorContext::new()
                .with_field_path("GEMINI_BASE_URL")
                .with_details(raw.to_string())
                .with_source("config"),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("Unsupported URL scheme '{}'", url.scheme()),
            ErrorContext::new()
                .with_field_path("GEMINI_BASE_URL")
                .with_source("config"),
        ));
    }
    Ok(url)
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.parse().map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid bind address: {}", e),
            ErrorContext::new()
                .with_field_path("CHAT2VIS_BIND_ADDR")
                .with_details(raw.to_string())
                .with_source("config"),
        )
    })
}
