//! Infrastructure implementations for Notifier
//!
//! - [`TerminalNotifier`] draws dialogs and toasts for a person at the terminal
//! - [`JsonNotifier`] emits them as NDJSON events for automation

mod json;
mod terminal;

pub use json::JsonNotifier;
pub use terminal::TerminalNotifier;
