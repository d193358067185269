use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration, built once at startup and shared by reference.
#[derive(Clone)]
pub struct AppConfig {
    /// Target of prediction calls.
    pub endpoint_url: String,
    /// Credential for the completion provider. `None` means every assistant
    /// question gets the fallback reply.
    pub api_key: Option<String>,
    pub completion_base_url: String,
    pub completion_model: String,
    pub completion_timeout: Duration,
    pub prediction_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub catalog_paths: Vec<PathBuf>,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("completion_base_url", &self.completion_base_url)
            .field("completion_model", &self.completion_model)
            .field("completion_timeout", &self.completion_timeout)
            .field("prediction_timeout", &self.prediction_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("catalog_paths", &self.catalog_paths)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same parsing as `from_env`, over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let endpoint_url =
            get("PREDICTION_ENDPOINT_URL").ok_or(ConfigError::Missing("PREDICTION_ENDPOINT_URL"))?;

        let prediction_timeout = timeout_secs(
            "PREDICTION_TIMEOUT_SECS",
            get("PREDICTION_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let completion_timeout = timeout_secs(
            "COMPLETION_TIMEOUT_SECS",
            get("COMPLETION_TIMEOUT_SECS"),
            DEFAULT_COMPLETION_TIMEOUT_SECS,
        )?;

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            reason: format!("{e}"),
        })?;

        let catalog_paths = get("CATALOG_PATHS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            endpoint_url,
            api_key: get("COMPLETION_API_KEY"),
            completion_base_url: get("COMPLETION_BASE_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_BASE_URL.to_string()),
            completion_model: get("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_timeout,
            prediction_timeout,
            bind_addr,
            catalog_paths,
        })
    }
}

fn timeout_secs(
    key: &'static str,
    raw: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(default));
    };
    let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
        key,
        reason: format!("expected whole seconds, got {raw:?}"),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}
