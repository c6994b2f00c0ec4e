//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod notifier;
pub mod presenter;

pub use command_runner::{CommandRunner, ExecutionResult, NO_OUTPUT};
pub use notifier::{Alert, Notifier, RecordingNotifier};
pub use presenter::{MenuPresenter, ScriptedPresenter, Selection, SelectionParseError};
