use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Client configuration
///
/// Every field carries a default, so `Settings::load()` succeeds even when
/// no configuration sources are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub device: DeviceSettings,
}

/// Backend endpoint and transport settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.lume.app".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client identification sent in the fixed header set of every request
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceSettings {
    #[serde(default = "default_app_version")]
    pub app_version: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            platform: default_platform(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_app_version() -> String {
    "3".to_string()
}

fn default_platform() -> String {
    "ios".to_string()
}

fn default_user_agent() -> String {
    "Lume/3.0.4 (iPhone; iOS 7.1; Scale/2.00)".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local config file (for development overrides)
    /// 4. Environment variables (prefixed with LUME_)
    ///    e.g., LUME_API__ENDPOINT -> api.endpoint
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
