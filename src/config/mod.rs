//! Configuration module for totui
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (TOTUI_*)
//! 3. Project config (./.totui.toml)
//! 4. User config (~/.config/totui/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod env_validator;
mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, LogConfig, OutputConfig};
