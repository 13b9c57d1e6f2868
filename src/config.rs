use std::{env, fmt, time::Duration};

pub const DEFAULT_HOST: &str = "na1.api.riotgames.com";
pub const API_KEY_VAR: &str = "RIOT_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads the API key from the environment, after loading `.env` if present.
    pub fn from_env(host: Option<String>, timeout_secs: Option<u64>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let api_key = env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(api_key, host, timeout_secs)
    }

    pub fn new(api_key: String, host: Option<String>, timeout_secs: Option<u64>) -> Result<Self, ConfigError> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let host = match host {
            Some(host) => normalize_host(&host)?,
            None => DEFAULT_HOST.to_string(),
        };

        let timeout_secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            host,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

fn normalize_host(raw: &str) -> Result<String, ConfigError> {
    let host = raw.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.trim_end_matches('/');

    if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidHost(raw.to_string()));
    }

    Ok(host.to_string())
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingApiKey,
    InvalidHost(String),
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey => write!(f, "{} is not set (environment or .env file)", API_KEY_VAR),
            ConfigError::InvalidHost(host) => write!(f, "Invalid API host: {:?}", host),
            ConfigError::InvalidTimeout => write!(f, "Request timeout must be at least one second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_na_host() {
        let config = ApiConfig::new("RGAPI-key".into(), None, None).unwrap();
        assert_eq!(config.base_url(), "https://na1.api.riotgames.com");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn host_is_normalized() {
        let config = ApiConfig::new("key".into(), Some("https://euw1.api.riotgames.com/".into()), Some(3)).unwrap();
        assert_eq!(config.host, "euw1.api.riotgames.com");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_blank_key_and_bad_host() {
        assert_eq!(ApiConfig::new("  ".into(), None, None).unwrap_err(), ConfigError::MissingApiKey);
        assert!(matches!(
            ApiConfig::new("key".into(), Some("euw1/lol".into()), None),
            Err(ConfigError::InvalidHost(_))
        ));
        assert_eq!(ApiConfig::new("key".into(), None, Some(0)).unwrap_err(), ConfigError::InvalidTimeout);
    }
}
