//! Domain Layer
//!
//! The navigation engine and its collaborators, free of terminal and
//! process details.
//!
//! ## Structure
//!
//! - `services/` - Navigation, script menus, outcome classification
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! All user interaction and process spawning goes through the ports, so the
//! services can be driven by scripted collaborators in tests.

pub mod ports;
pub mod services;
