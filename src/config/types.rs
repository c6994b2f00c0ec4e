//! Configuration types

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infrastructure::fs::expand_home;

/// Menu file used when nothing else is configured.
pub const DEFAULT_MENU_FILE: &str = "~/.shellmenu/menu.txt";

/// Skin used when none is configured, and the fallback for a missing skin.
pub const DEFAULT_SKIN: &str = "Default";

/// Icon location inside a skin directory.
pub const NOTIFY_ICON: &str = "media/notify.png";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu definition file; `~` is expanded
    pub menu_file: PathBuf,

    /// Directory holding skins; no icon is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_dir: Option<PathBuf>,

    pub skin: String,

    /// Kill commands that run longer than this; unset or 0 waits forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout_secs: Option<u64>,

    /// Message text overrides keyed by message name
    pub messages: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: PathBuf::from(DEFAULT_MENU_FILE),
            skin_dir: None,
            skin: DEFAULT_SKIN.to_string(),
            command_timeout_secs: None,
            messages: HashMap::new(),
        }
    }
}

impl Config {
    /// Parse a TOML document. Unknown keys are ignored; see [`super::load_with_warnings`].
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Menu file with `~` expanded.
    pub fn menu_file_path(&self, home: Option<&Path>) -> PathBuf {
        expand_home(&self.menu_file, home)
    }

    /// Skin directory in use: the configured skin if present, else the default one.
    pub fn skin_path(&self, home: Option<&Path>) -> Option<PathBuf> {
        let skin_dir = expand_home(self.skin_dir.as_deref()?, home);
        let chosen = skin_dir.join(&self.skin);
        if chosen.is_dir() {
            Some(chosen)
        } else {
            Some(skin_dir.join(DEFAULT_SKIN))
        }
    }

    /// Notification icon of the resolved skin, if the file exists.
    pub fn notify_icon(&self, home: Option<&Path>) -> Option<PathBuf> {
        let icon = self.skin_path(home)?.join(NOTIFY_ICON);
        icon.is_file().then_some(icon)
    }
}
