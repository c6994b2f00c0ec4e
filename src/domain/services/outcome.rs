//! Outcome classification
//!
//! Decides what a finished command means for the user, from the item's flags
//! and the captured result. The first matching rule wins; the rules are not
//! cumulative.

use std::io;

use tracing::debug;

use crate::domain::ports::{ExecutionResult, Notifier};
use crate::messages::MessageId;
use crate::models::ItemFlags;

use super::context::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Successful scriptmenu run: offer its output lines as choices
    ExpandScriptMenu,
    /// Failed scriptmenu run: show the combined output
    ScriptFailed,
    ExitCodeMismatch { expected: i32, actual: i32 },
    /// Show the combined output in a dialog
    ShowOutput,
    /// Non-blocking toast
    Notify,
    Silent,
}

/// Classify a direct run of a menu item.
pub fn classify(flags: &ItemFlags, result: &ExecutionResult) -> Outcome {
    if flags.is_scriptmenu {
        return if result.exit_code == 0 {
            Outcome::ExpandScriptMenu
        } else {
            Outcome::ScriptFailed
        };
    }
    classify_followup(flags, result)
}

/// Classify a run where the scriptmenu flag no longer applies.
///
/// Used for the re-invocation with a chosen script line appended.
pub fn classify_followup(flags: &ItemFlags, result: &ExecutionResult) -> Outcome {
    if let Some(expected) = flags.exitcode {
        if expected != result.exit_code {
            return Outcome::ExitCodeMismatch {
                expected,
                actual: result.exit_code,
            };
        }
    }

    if flags.show {
        Outcome::ShowOutput
    } else if flags.notify {
        Outcome::Notify
    } else {
        Outcome::Silent
    }
}

/// Surface an outcome through the notifier.
///
/// [`Outcome::ExpandScriptMenu`] is left to the caller.
pub fn report(
    outcome: Outcome,
    label: &str,
    result: &ExecutionResult,
    ctx: &SessionContext,
    notifier: &mut dyn Notifier,
) -> io::Result<()> {
    let messages = &ctx.messages;
    debug!(item = %label, ?outcome, "reporting outcome");

    match outcome {
        Outcome::ExpandScriptMenu | Outcome::Silent => Ok(()),
        Outcome::ScriptFailed => notifier.dialog(
            messages.get(MessageId::ExecutionTitle),
            &result.combined_output,
        ),
        Outcome::ExitCodeMismatch { actual, .. } => notifier.dialog(
            messages.get(MessageId::ExecutionTitle),
            &messages.format(
                MessageId::ExitCodeMismatch,
                &[("item", label), ("code", &actual.to_string())],
            ),
        ),
        Outcome::ShowOutput => notifier.dialog(
            messages.get(MessageId::OutputTitle),
            &result.combined_output,
        ),
        Outcome::Notify => {
            let body = if result.stdout_text.is_empty() {
                &result.combined_output
            } else {
                &result.stdout_text
            };
            notifier.notification(label, body, ctx.notify_icon.as_deref())
        }
    }
}
