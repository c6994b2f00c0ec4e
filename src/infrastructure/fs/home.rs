//! Home directory resolution with an override for tests and sandboxes.
//!
//! `dirs::home_dir()` ignores `HOME` on some platforms, so every path that
//! depends on the home directory (the default menu file, skin directory,
//! `~` in commands) goes through [`shellmenu_home_dir`] instead.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::services::expand_tilde;

/// Environment variable that replaces the detected home directory.
pub const SHELLMENU_HOME_VAR: &str = "SHELLMENU_HOME";

/// Home directory used for all shellmenu paths.
///
/// `SHELLMENU_HOME` wins when set and non-empty; otherwise the platform
/// home directory is used. `None` when neither is available.
pub fn shellmenu_home_dir() -> Option<PathBuf> {
    home_dir_from(std::env::var_os(SHELLMENU_HOME_VAR))
}

fn home_dir_from(override_value: Option<OsString>) -> Option<PathBuf> {
    override_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Expand a leading `~` in a configured path.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match path.to_str() {
        Some(text) => PathBuf::from(expand_tilde(text, home)),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_platform_home() {
        assert_eq!(
            home_dir_from(Some(OsString::from("/sandbox/home"))),
            Some(PathBuf::from("/sandbox/home"))
        );
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(home_dir_from(Some(OsString::new())), dirs::home_dir());
    }

    #[test]
    fn expand_home_only_touches_leading_tilde() {
        let home = Path::new("/home/kodi");
        assert_eq!(
            expand_home(Path::new("~/.shellmenu/menu.txt"), Some(home)),
            PathBuf::from("/home/kodi/.shellmenu/menu.txt")
        );
        assert_eq!(
            expand_home(Path::new("/etc/menu.txt"), Some(home)),
            PathBuf::from("/etc/menu.txt")
        );
        assert_eq!(
            expand_home(Path::new("~/menu.txt"), None),
            PathBuf::from("~/menu.txt")
        );
    }
}
