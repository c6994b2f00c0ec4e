//! Terminal Notifier
//!
//! Dialogs are framed on stderr and wait for Enter on stdin; notifications
//! are a single line and return immediately.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::ports::Notifier;
use crate::ui::views::alert::{render_dialog, render_notification};
use crate::ui::TerminalCapabilities;

pub struct TerminalNotifier<R, W> {
    input: R,
    output: W,
    caps: TerminalCapabilities,
}

impl TerminalNotifier<io::StdinLock<'static>, io::Stderr> {
    /// Notifier on the process's stdin and stderr.
    pub fn stdio(caps: TerminalCapabilities) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), caps)
    }
}

impl<R: BufRead, W: Write> TerminalNotifier<R, W> {
    pub fn new(input: R, output: W, caps: TerminalCapabilities) -> Self {
        Self {
            input,
            output,
            caps,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Notifier for TerminalNotifier<R, W> {
    fn dialog(&mut self, title: &str, body: &str) -> io::Result<()> {
        let rendered = render_dialog(
            title,
            body,
            self.caps.width,
            self.caps.supports_color,
            self.caps.supports_unicode,
        );
        writeln!(self.output, "{}", rendered)?;
        self.output.flush()?;

        // EOF counts as acknowledged.
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn notification(&mut self, title: &str, body: &str, _icon: Option<&Path>) -> io::Result<()> {
        let rendered = render_notification(
            title,
            body,
            self.caps.supports_color,
            self.caps.supports_unicode,
        );
        writeln!(self.output, "{}", rendered)?;
        self.output.flush()
    }
}
