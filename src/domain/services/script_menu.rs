//! Dynamic submenus built from a script's output.
//!
//! Each non-empty stdout line of a successful `scriptmenu` run becomes a
//! choice. The chosen line is appended to the original argv and the command
//! runs again, this time with the item's other flags in charge.

use tracing::{debug, warn};

use crate::domain::ports::Selection;
use crate::error::SessionError;
use crate::messages::MessageId;
use crate::models::ItemFlags;

use super::context::Launcher;
use super::navigator::{execute, Flow};
use super::outcome::{classify_followup, report};

/// Offer `stdout_text` lines as a menu and re-run `argv` with the pick.
pub fn expand_script_menu(
    launcher: &mut Launcher<'_>,
    argv: &[String],
    stdout_text: &str,
    flags: &ItemFlags,
    label: &str,
) -> Result<Flow, SessionError> {
    let choices = script_choices(stdout_text);
    debug!(item = %label, choices = choices.len(), "script menu");

    if choices.is_empty() {
        let messages = &launcher.ctx.messages;
        launcher
            .notifier
            .notification(
                messages.get(MessageId::ScriptTitle),
                messages.get(MessageId::NoResults),
                launcher.ctx.notify_icon.as_deref(),
            )
            .map_err(SessionError::Notifier)?;
        return Ok(Flow::Continue);
    }

    let selection = launcher
        .presenter
        .show_menu(label, &choices)
        .map_err(SessionError::Presenter)?;

    let choice = match selection {
        Selection::Cancel => return Ok(Flow::Continue),
        Selection::Quit => return Ok(Flow::Quit),
        Selection::Index(index) => match choices.get(index) {
            Some(choice) => *choice,
            None => {
                warn!(index, len = choices.len(), "script selection out of range");
                return Ok(Flow::Continue);
            }
        },
    };

    let mut followup = argv.to_vec();
    followup.push(choice.to_string());

    let Some(result) = execute(launcher, &followup)? else {
        return Ok(Flow::Continue);
    };

    let outcome = classify_followup(flags, &result);
    report(
        outcome,
        label,
        &result,
        launcher.ctx,
        &mut *launcher.notifier,
    )
    .map_err(SessionError::Notifier)?;
    Ok(Flow::Continue)
}

/// Trimmed, non-empty output lines in order.
fn script_choices(stdout_text: &str) -> Vec<&str> {
    stdout_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
