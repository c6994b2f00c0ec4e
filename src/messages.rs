//! User-facing message catalog
//!
//! Every dialog and notification text is looked up by [`MessageId`], so the
//! wording can be replaced from the `[messages]` config table without
//! touching the code that decides *which* message to show.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
    /// Title of every menu-file problem dialog
    MenuFileTitle,
    MenuFileNotFound,
    MenuFileIsDirectory,
    MenuFilePermissionDenied,
    MenuFileUnreadable,
    MenuEmpty,
    /// Title of execution problem dialogs
    ExecutionTitle,
    ExecutionFailed,
    ExitCodeMismatch,
    /// Title of output dialogs and notifications
    OutputTitle,
    ScriptTitle,
    NoResults,
}

impl MessageId {
    pub const ALL: [MessageId; 12] = [
        MessageId::MenuFileTitle,
        MessageId::MenuFileNotFound,
        MessageId::MenuFileIsDirectory,
        MessageId::MenuFilePermissionDenied,
        MessageId::MenuFileUnreadable,
        MessageId::MenuEmpty,
        MessageId::ExecutionTitle,
        MessageId::ExecutionFailed,
        MessageId::ExitCodeMismatch,
        MessageId::OutputTitle,
        MessageId::ScriptTitle,
        MessageId::NoResults,
    ];

    /// Config key for this message.
    pub fn key(self) -> &'static str {
        match self {
            MessageId::MenuFileTitle => "menu_file_title",
            MessageId::MenuFileNotFound => "menu_file_not_found",
            MessageId::MenuFileIsDirectory => "menu_file_is_directory",
            MessageId::MenuFilePermissionDenied => "menu_file_permission_denied",
            MessageId::MenuFileUnreadable => "menu_file_unreadable",
            MessageId::MenuEmpty => "menu_empty",
            MessageId::ExecutionTitle => "execution_title",
            MessageId::ExecutionFailed => "execution_failed",
            MessageId::ExitCodeMismatch => "exit_code_mismatch",
            MessageId::OutputTitle => "output_title",
            MessageId::ScriptTitle => "script_title",
            MessageId::NoResults => "no_results",
        }
    }

    /// Built-in English text. `{name}` marks a placeholder.
    pub fn default_text(self) -> &'static str {
        match self {
            MessageId::MenuFileTitle => "Menu file",
            MessageId::MenuFileNotFound => "The menu file {path} does not exist.",
            MessageId::MenuFileIsDirectory => "The menu file {path} is a directory.",
            MessageId::MenuFilePermissionDenied => {
                "Permission denied while reading the menu file {path}."
            }
            MessageId::MenuFileUnreadable => "The menu file {path} could not be read.",
            MessageId::MenuEmpty => "The menu file {path} contains no entries.",
            MessageId::ExecutionTitle => "Error",
            MessageId::ExecutionFailed => "Could not execute: {command}",
            MessageId::ExitCodeMismatch => "{item} finished with exit code {code}",
            MessageId::OutputTitle => "Output",
            MessageId::ScriptTitle => "Script",
            MessageId::NoResults => "The script returned no entries.",
        }
    }
}

impl FromStr for MessageId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or(())
    }
}

/// Message texts with optional overrides.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<MessageId, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply overrides keyed by config name; returns keys that matched no message.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> (Self, Vec<String>) {
        let mut messages = Self::new();
        let mut unknown = Vec::new();
        for (key, text) in overrides {
            match key.parse::<MessageId>() {
                Ok(id) => {
                    messages.overrides.insert(id, text.clone());
                }
                Err(()) => unknown.push(key.clone()),
            }
        }
        unknown.sort();
        (messages, unknown)
    }

    /// Raw text of a message.
    pub fn get(&self, id: MessageId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }

    /// Text with `{name}` placeholders replaced.
    pub fn format(&self, id: MessageId, args: &[(&str, &str)]) -> String {
        let mut text = self.get(id).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}
