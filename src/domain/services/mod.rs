//! Domain Services
//!
//! Stateless logic plus the navigation loop that drives the ports.

pub mod context;
pub mod invocation;
pub mod navigator;
pub mod outcome;
pub mod script_menu;

pub use context::{Launcher, SessionContext};
pub use invocation::{expand_tilde, resolve_argv};
pub use navigator::{navigate, Flow, NavigationEnd};
pub use outcome::{classify, classify_followup, Outcome};
pub use script_menu::expand_script_menu;
