//! Configuration discovery and loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::messages::MessageId;

use super::types::Config;

/// Points at a config file, overriding the per-user location.
pub const CONFIG_ENV_VAR: &str = "SHELLMENU_CONFIG";
pub const MENU_FILE_ENV_VAR: &str = "SHELLMENU_MENU_FILE";
pub const SKIN_DIR_ENV_VAR: &str = "SHELLMENU_SKIN_DIR";
pub const TIMEOUT_ENV_VAR: &str = "SHELLMENU_TIMEOUT";

const TOP_LEVEL_KEYS: &[&str] = &[
    "menu_file",
    "skin_dir",
    "skin",
    "command_timeout_secs",
    "messages",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the offending key
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Flag(PathBuf),
    /// `$SHELLMENU_CONFIG`
    Env(PathBuf),
    /// `<config_dir>/shellmenu/config.toml`
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::User(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

/// A loaded configuration with its origin and warnings.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Pick the config file: flag, then environment, then the per-user file.
///
/// Explicit locations are returned even when missing, so loading reports
/// them; a missing per-user file means defaults.
pub fn locate(
    explicit: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    config_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Flag(path.to_path_buf());
    }
    if let Some(path) = get_env(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return ConfigSource::Env(PathBuf::from(path));
    }
    match config_dir.map(|dir| dir.join("shellmenu").join("config.toml")) {
        Some(path) if path.is_file() => ConfigSource::User(path),
        _ => ConfigSource::Defaults,
    }
}

/// Locate and load the configuration, then apply environment overrides.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let get_env = |key: &str| std::env::var(key).ok();
    let source = locate(explicit, get_env, dirs::config_dir());
    debug!(?source, "config source");

    let (mut config, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };
    apply_env_overrides(&mut config, get_env);

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_warnings(&content, path)
}

/// Parse `content` as if read from `path`.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: suggest_key(&leaf, TOP_LEVEL_KEYS.iter().copied()),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    // `[messages]` is a free-form table; names that match no message are typos.
    let mut message_keys: Vec<&String> = config
        .messages
        .keys()
        .filter(|k| k.parse::<MessageId>().is_err())
        .collect();
    message_keys.sort();
    for key in message_keys {
        warnings.push(ConfigWarning {
            key: format!("messages.{}", key),
            file: path.to_path_buf(),
            line: find_line_number(content, key),
            suggestion: suggest_key(key, MessageId::ALL.iter().map(|id| id.key())),
        });
    }

    Ok((config, warnings))
}

/// Apply environment variable overrides (`SHELLMENU_*`).
pub fn apply_env_overrides(config: &mut Config, get_env: impl Fn(&str) -> Option<String>) {
    if let Some(menu_file) = get_env(MENU_FILE_ENV_VAR).filter(|v| !v.is_empty()) {
        config.menu_file = PathBuf::from(menu_file);
    }

    if let Some(skin_dir) = get_env(SKIN_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        config.skin_dir = Some(PathBuf::from(skin_dir));
    }

    if let Some(raw) = get_env(TIMEOUT_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.command_timeout_secs = Some(secs),
            Err(_) => warn!(
                var = TIMEOUT_ENV_VAR,
                value = %raw,
                "ignoring invalid timeout, expected whole seconds"
            ),
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key<'a>(unknown: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((candidate, dist)) if dist > 0 && dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
