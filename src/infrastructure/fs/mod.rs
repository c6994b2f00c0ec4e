//! File system helpers
//!
//! Home directory resolution and `~` expansion of configured paths.

mod home;

pub use home::{expand_home, shellmenu_home_dir, SHELLMENU_HOME_VAR};
