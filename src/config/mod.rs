//! Configuration module for shellmenu
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (`SHELLMENU_*`)
//! 3. Config file (`--config`, `$SHELLMENU_CONFIG`, or
//!    `<config_dir>/shellmenu/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load, load_with_warnings, locate, parse_with_warnings, ConfigSource,
    ConfigWarning, LoadedConfig, CONFIG_ENV_VAR, MENU_FILE_ENV_VAR, SKIN_DIR_ENV_VAR,
    TIMEOUT_ENV_VAR,
};
pub use types::{Config, DEFAULT_MENU_FILE, DEFAULT_SKIN, NOTIFY_ICON};
