pub mod console_config;

pub use console_config::{ConfigError, ConsoleConfig, default_config_path};
