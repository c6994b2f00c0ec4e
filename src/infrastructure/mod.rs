//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Home directory resolution
//! - `process` - Command runner backed by `std::process`
//! - `presenter` - Terminal select list
//! - `notifier/` - Terminal and NDJSON alert sinks

pub mod fs;
pub mod notifier;
pub mod presenter;
pub mod process;

// Re-export for convenience
pub use fs::{expand_home, shellmenu_home_dir};
pub use notifier::{JsonNotifier, TerminalNotifier};
pub use presenter::DialoguerPresenter;
pub use process::ProcessRunner;
