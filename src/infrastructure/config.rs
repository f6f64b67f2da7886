use crate::domain::error::TranslatorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// 与原有 .env 约定保持一致的环境变量名
pub const ENV_API_KEY: &str = "apikey";
pub const ENV_SERVICE_URL: &str = "url";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub watson: WatsonConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WatsonConfig {
    pub api_key: Option<String>,
    pub url: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_iam_url")]
    pub iam_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub proxy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Validated credentials required to reach the translation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub service_url: String,
}

impl Default for WatsonConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: None,
            version: default_version(),
            iam_url: default_iam_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

// Defaults
fn default_version() -> String {
    "2018-05-01".to_string()
}
fn default_iam_url() -> String {
    "https://iam.cloud.ibm.com/identity/token".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("mt/{}", env!("CARGO_PKG_VERSION"))
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Config {
    /// Override credentials with values from the environment.
    ///
    /// Empty values are ignored so a blank variable never masks the file.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.watson.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_SERVICE_URL).filter(|v| !v.trim().is_empty()) {
            self.watson.url = Some(url);
        }
    }

    pub fn credentials(&self) -> Result<Credentials, TranslatorError> {
        let api_key = non_empty(self.watson.api_key.as_deref())
            .ok_or_else(|| TranslatorError::Config("API key not configured".to_string()))?;
        let service_url = non_empty(self.watson.url.as_deref())
            .ok_or_else(|| TranslatorError::Config("Service URL not configured".to_string()))?;

        Ok(Credentials {
            api_key: api_key.to_string(),
            service_url: service_url.trim_end_matches('/').to_string(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mt").join("config.toml"))
}

/// Parse a config file, falling back to defaults when it cannot be parsed
pub fn load_config_from(path: &Path) -> Result<Config, TranslatorError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn load_config() -> Result<Config, TranslatorError> {
    // .env 不存在时静默忽略
    dotenvy::dotenv().ok();

    let mut config = match get_config_path() {
        Some(path) => load_config_from(&path)?,
        None => Config::default(),
    };
    config.apply_env(|name| std::env::var(name).ok());

    Ok(config)
}

pub fn write_config_sample(path: &Path) -> Result<bool, TranslatorError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslatorError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslatorError::Config(format!("Failed to write config file: {}", e)))?;

    Ok(true)
}

pub fn generate_config_sample() -> Result<(), TranslatorError> {
    let path = get_config_path().ok_or_else(|| {
        TranslatorError::Config("Cannot determine config directory".to_string())
    })?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }

    Ok(())
}
