//! Application configuration
//!
//! Loads configuration from a TOML file with environment variable fallback.
//! The loaded configuration is cached in a process-wide `OnceLock`.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (tracing EnvFilter syntax)
    pub level: String,
    /// Output format: "text" or "json"
    pub format: String,
    /// Log file path; empty or unset logs to stdout
    pub file: Option<String>,
    /// Rotate log files daily
    pub enable_rotation: bool,
    /// Number of rotated files to keep
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
            enable_rotation: true,
            max_backups: 7,
        }
    }
}

/// 钱包提供者配置
///
/// A configured address stands in for the injected wallet extension:
/// no address means no provider is available at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Public key the provider resolves connections with
    pub address: Option<String>,
    /// Whether this client is already authorized (passive connect succeeds)
    pub trusted: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub wallet: WalletConfig,
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    /// Load configuration from TOML file
    fn load_from_file() -> Self {
        let config_paths = [
            "config.toml",
            "gifdeck.toml",
            "config/config.toml",
            "/etc/gifdeck/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    pub fn override_with_env(&mut self) {
        // Logging config
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }

        // Wallet config
        if let Ok(address) = env::var("WALLET_ADDRESS") {
            if !address.is_empty() {
                self.wallet.address = Some(address);
            }
        }
        if let Ok(trusted) = env::var("WALLET_TRUSTED") {
            self.wallet.trusted = matches!(trusted.as_str(), "1" | "true" | "yes");
        }
    }
}

/// Get the global configuration, loading it on first access
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}
