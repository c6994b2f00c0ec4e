//! Notifier Port
//!
//! The alert sink: a blocking message dialog and a non-blocking
//! notification toast.

use std::io;
use std::path::{Path, PathBuf};

/// Trait for surfacing messages to the user.
pub trait Notifier {
    /// Show a message and wait until the user acknowledges it.
    fn dialog(&mut self, title: &str, body: &str) -> io::Result<()>;

    /// Show a short message without waiting.
    fn notification(&mut self, title: &str, body: &str, icon: Option<&Path>) -> io::Result<()>;
}

/// One recorded call on a [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Dialog {
        title: String,
        body: String,
    },
    Notification {
        title: String,
        body: String,
        icon: Option<PathBuf>,
    },
}

/// Notifier that keeps every alert in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub alerts: Vec<Alert>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialogs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alerts.iter().filter_map(|a| match a {
            Alert::Dialog { title, body } => Some((title.as_str(), body.as_str())),
            Alert::Notification { .. } => None,
        })
    }

    pub fn notifications(&self) -> impl Iterator<Item = (&str, &str)> {
        self.alerts.iter().filter_map(|a| match a {
            Alert::Notification { title, body, .. } => Some((title.as_str(), body.as_str())),
            Alert::Dialog { .. } => None,
        })
    }
}

impl Notifier for RecordingNotifier {
    fn dialog(&mut self, title: &str, body: &str) -> io::Result<()> {
        self.alerts.push(Alert::Dialog {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    fn notification(&mut self, title: &str, body: &str, icon: Option<&Path>) -> io::Result<()> {
        self.alerts.push(Alert::Notification {
            title: title.to_string(),
            body: body.to_string(),
            icon: icon.map(Path::to_path_buf),
        });
        Ok(())
    }
}
