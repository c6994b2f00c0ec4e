//! Menu session use case
//!
//! One session reads the menu file fresh, reports any problem with it in a
//! dialog, and otherwise hands the tree to the navigation engine.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::services::{navigate, Launcher, NavigationEnd};
use crate::error::{MenuFileError, SessionError};
use crate::messages::{MessageId, Messages};
use crate::parser::load_menu_file;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Navigation finished normally
    Navigated(NavigationEnd),
    /// The menu file could not be read or parsed; a dialog was shown
    MenuUnavailable,
    /// The menu file has no entries; a dialog was shown
    MenuEmpty,
}

impl SessionEnd {
    /// Whether the session failed before any menu was shown.
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionEnd::MenuUnavailable)
    }
}

/// Run one menu session for the file at `menu_path`.
pub fn run_session(
    menu_path: &Path,
    launcher: &mut Launcher<'_>,
) -> Result<SessionEnd, SessionError> {
    let messages = &launcher.ctx.messages;

    let tree = match load_menu_file(menu_path) {
        Ok(tree) => tree,
        Err(err) => {
            warn!(path = %menu_path.display(), error = %err, "menu file unavailable");
            let body = menu_file_problem(&err, menu_path, messages);
            launcher
                .notifier
                .dialog(messages.get(MessageId::MenuFileTitle), &body)
                .map_err(SessionError::Notifier)?;
            return Ok(SessionEnd::MenuUnavailable);
        }
    };

    if tree.is_empty() {
        debug!(path = %menu_path.display(), "menu file has no entries");
        let path = menu_path.display().to_string();
        launcher
            .notifier
            .dialog(
                messages.get(MessageId::MenuFileTitle),
                &messages.format(MessageId::MenuEmpty, &[("path", &path)]),
            )
            .map_err(SessionError::Notifier)?;
        return Ok(SessionEnd::MenuEmpty);
    }

    navigate(launcher, &tree).map(SessionEnd::Navigated)
}

/// Dialog text for a menu file problem; parse errors are shown verbatim.
fn menu_file_problem(err: &MenuFileError, menu_path: &Path, messages: &Messages) -> String {
    let path = menu_path.display().to_string();
    let id = match err {
        MenuFileError::Parse(parse) => return parse.to_string(),
        MenuFileError::NotFound { .. } => MessageId::MenuFileNotFound,
        MenuFileError::IsADirectory { .. } => MessageId::MenuFileIsDirectory,
        MenuFileError::PermissionDenied { .. } => MessageId::MenuFilePermissionDenied,
        MenuFileError::Unreadable { .. } => MessageId::MenuFileUnreadable,
    };
    messages.format(id, &[("path", &path)])
}
