use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PanelError, PanelResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the spider server, e.g. `http://localhost:5000`.
    #[serde(default = "default_server_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// How often the panel re-fetches the two read endpoints.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_server_url() -> String {
    // Default interface server port of the spider.
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    5
}

fn default_connect_timeout() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_refresh_interval() -> u64 {
    2
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            theme: default_theme(),
        }
    }
}

impl PanelConfig {
    /// Load configuration from the default file locations and environment.
    ///
    /// Layering, lowest priority first: built-in defaults, config files,
    /// `SPIDER_*` environment variables.
    pub fn load() -> PanelResult<Self> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> PanelResult<Self> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("SPIDER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut panel_config: PanelConfig = config.try_deserialize().unwrap_or_default();

        if let Ok(url) = std::env::var("SPIDER_URL") {
            panel_config.server.url = url;
        }
        if let Ok(level) = std::env::var("SPIDER_LOG_LEVEL") {
            panel_config.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            panel_config.logging.level = level;
        }

        panel_config.validate()?;
        Ok(panel_config)
    }

    pub fn validate(&self) -> PanelResult<()> {
        if !self.server.url.starts_with("http://") && !self.server.url.starts_with("https://") {
            return Err(PanelError::InvalidServerUrl(self.server.url.clone()));
        }
        if self.tui.refresh_interval_secs == 0 {
            return Err(PanelError::InvalidConfigValue {
                key: "tui.refresh_interval_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = std::env::current_dir() {
        paths.push(dir.join("spiderpanel.toml"));
    }
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".spiderpanel").join("config.toml"));
    }
    paths
}

fn load_dotenv_files() {
    if let Ok(dir) = std::env::current_dir() {
        let path = dir.join(".env");
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PanelConfig::default();
        assert_eq!(config.server.url, "http://localhost:5000");
        assert_eq!(config.server.request_timeout_secs, 5);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.tui.refresh_interval_secs, 2);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = PanelConfig::default();
        config.server.url = "localhost:5000".to_string();
        assert!(matches!(
            config.validate(),
            Err(PanelError::InvalidServerUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_refresh() {
        let mut config = PanelConfig::default();
        config.tui.refresh_interval_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(PanelError::InvalidConfigValue { .. })
        ));
    }
}
