//! Terminal presentation: theme tokens, capability detection, NDJSON output
//! and the text views rendered by the CLI.

pub mod json;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::LauncherTheme;
