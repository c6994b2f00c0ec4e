//! Application Layer
//!
//! Use cases that orchestrate the domain services with concrete ports.
//!
//! - `run_session` - Load the menu file and navigate it until the user leaves
//! - `check_menu_file` - Load and validate a menu file without running anything

pub mod check;
pub mod session;

pub use check::{check_menu_file, CheckReport};
pub use session::{run_session, SessionEnd};
