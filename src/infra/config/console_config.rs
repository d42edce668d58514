use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::app::column_resize::{DEFAULT_MIN_COLUMN_WIDTH, ResizeConfig};
use crate::app::device_limit::LimitRules;
use crate::app::device_list::{DEFAULT_PAGE_SIZES, DEFAULT_PER_PAGE, DeviceListState};

pub const CONFIG_FILE_NAME: &str = "fleetdeck.toml";
pub const CONFIG_ENV_VAR: &str = "FLEETDECK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub columns: ColumnsConfig,
    pub device_list: DeviceListConfig,
    pub subscription: SubscriptionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnsConfig {
    pub min_width: f64,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_COLUMN_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceListConfig {
    pub page_sizes: Vec<usize>,
    pub per_page: usize,
}

impl Default for DeviceListConfig {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubscriptionConfig {
    pub step: u32,
    pub os_minimum: u32,
    pub professional_minimum: u32,
    pub enterprise_minimum: u32,
    pub debounce_ms: u64,
    pub product_name: String,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        let rules = LimitRules::default();
        Self {
            step: rules.step,
            os_minimum: rules.os_minimum,
            professional_minimum: rules.professional_minimum,
            enterprise_minimum: rules.enterprise_minimum,
            debounce_ms: rules.debounce.as_millis() as u64,
            product_name: rules.product_name,
        }
    }
}

impl ConsoleConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded console config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.columns.min_width.is_finite() || self.columns.min_width < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "columns.min_width",
                reason: format!("{} is not a non-negative width", self.columns.min_width),
            });
        }
        if self.device_list.page_sizes.contains(&0) {
            return Err(ConfigError::InvalidValue {
                key: "device_list.page_sizes",
                reason: "page sizes must be positive".to_string(),
            });
        }
        if !self.device_list.page_sizes.contains(&self.device_list.per_page) {
            return Err(ConfigError::InvalidValue {
                key: "device_list.per_page",
                reason: format!(
                    "{} is not one of {:?}",
                    self.device_list.per_page, self.device_list.page_sizes
                ),
            });
        }
        if self.subscription.step == 0 {
            return Err(ConfigError::InvalidValue {
                key: "subscription.step",
                reason: "step must be positive".to_string(),
            });
        }
        let s = &self.subscription;
        if s.os_minimum > s.professional_minimum
            || s.professional_minimum > s.enterprise_minimum
        {
            return Err(ConfigError::InvalidValue {
                key: "subscription.enterprise_minimum",
                reason: format!(
                    "plan minimums must not decrease: os {}, professional {}, enterprise {}",
                    s.os_minimum, s.professional_minimum, s.enterprise_minimum
                ),
            });
        }
        Ok(())
    }

    pub fn resize_config(&self) -> ResizeConfig {
        ResizeConfig {
            min_width: self.columns.min_width,
        }
    }

    pub fn device_list_state(&self) -> DeviceListState {
        DeviceListState::new(self.device_list.page_sizes.clone(), self.device_list.per_page)
    }

    pub fn limit_rules(&self) -> LimitRules {
        let s = &self.subscription;
        LimitRules {
            step: s.step,
            os_minimum: s.os_minimum,
            professional_minimum: s.professional_minimum,
            enterprise_minimum: s.enterprise_minimum,
            debounce: Duration::from_millis(s.debounce_ms),
            product_name: s.product_name.clone(),
        }
    }
}

/// Config file location: `$FLEETDECK_CONFIG`, else the user config directory.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("fleetdeck").join(CONFIG_FILE_NAME))
}
