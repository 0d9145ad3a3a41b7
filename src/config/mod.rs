use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the config file.
pub const API_URL_ENV: &str = "COSTBOARD_API_URL";

/// Persisted settings (~/.config/costboard/config.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the Cost Planner API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("costboard");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Effective settings, resolved once at startup and fixed for the
/// lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Resolve the base URL: CLI flag, then COSTBOARD_API_URL, then the
    /// config file, then the default.
    pub fn resolve(cli_override: Option<String>) -> Self {
        let file = AppConfig::load().unwrap_or_default();
        Self::from_sources(cli_override, std::env::var(API_URL_ENV).ok(), file.api_base_url)
    }

    fn from_sources(cli: Option<String>, env: Option<String>, file: Option<String>) -> Self {
        let raw = cli
            .filter(|s| !s.is_empty())
            .or(env.filter(|s| !s.is_empty()))
            .or(file.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Trim trailing slashes so joined URLs stay clean
        Config {
            api_base_url: raw.trim_end_matches('/').to_string(),
        }
    }

    /// Collection endpoint for cost plans
    pub fn plans_url(&self) -> String {
        format!("{}/api/v1/cost-plans", self.api_base_url)
    }

    /// Interactive API docs served by the backend
    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.api_base_url)
    }
}
