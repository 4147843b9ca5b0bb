use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("REMOTE_URL and REMOTE_API_KEY must be set together")]
    IncompleteRemote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// `None` runs the remote-backed stores on their defaults.
    pub remote: Option<RemoteConfig>,
    pub environment: String,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let timeout_secs = match var("REMOTE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "REMOTE_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => 10,
        };

        let remote = match (var("REMOTE_URL"), var("REMOTE_API_KEY")) {
            (Some(url), Some(api_key)) => Some(RemoteConfig {
                url,
                api_key,
                timeout: Duration::from_secs(timeout_secs),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteRemote),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            data_dir: PathBuf::from(var("DATA_DIR").unwrap_or_else(|| "./data".to_string())),
            remote,
            environment: var("RUST_ENV").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
