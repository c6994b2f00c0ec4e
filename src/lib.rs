//! shellmenu - launch shell commands from a hierarchical, file-defined menu
//!
//! A plain-text menu file describes items and nested submenus. Picking an
//! item runs its command without a shell and, depending on the item's
//! flags, shows the output, raises a notification, checks the exit code, or
//! turns the output into a follow-up menu.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod messages;
pub mod models;
pub mod parser;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use error::{ConfigError, ExecutionError, MenuFileError, ParseError, SessionError};
pub use models::{ItemFlags, MenuEntry, MenuItem, MenuTree, SubmenuNode};
pub use parser::{load_menu_file, parse_menu};
