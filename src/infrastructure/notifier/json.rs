//! JSON Notifier
//!
//! Writes alerts as NDJSON events for scripted runs. Dialogs never block.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::ports::Notifier;
use crate::ui::json::write_event;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum AlertEvent<'a> {
    Dialog {
        title: &'a str,
        body: &'a str,
    },
    Notification {
        title: &'a str,
        body: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
}

pub struct JsonNotifier<W> {
    writer: W,
}

impl JsonNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for JsonNotifier<W> {
    fn dialog(&mut self, title: &str, body: &str) -> io::Result<()> {
        write_event(&mut self.writer, &AlertEvent::Dialog { title, body })
    }

    fn notification(&mut self, title: &str, body: &str, icon: Option<&Path>) -> io::Result<()> {
        let icon = icon.map(|p| p.display().to_string());
        write_event(
            &mut self.writer,
            &AlertEvent::Notification { title, body, icon },
        )
    }
}
