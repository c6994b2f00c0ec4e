//! Navigation engine
//!
//! Walks a [`MenuTree`] with an explicit, heap-allocated stack of levels.
//! Submenu depth is bounded only by the menu file, never by the call stack.

use tracing::{debug, info, warn};

use crate::domain::ports::{ExecutionResult, Selection};
use crate::error::SessionError;
use crate::messages::MessageId;
use crate::models::{labels, MenuEntry, MenuItem, MenuTree};

use super::context::Launcher;
use super::invocation::resolve_argv;
use super::outcome::{classify, report, Outcome};
use super::script_menu::expand_script_menu;

/// Prompt shown for the top level
pub const ROOT_PROMPT: &str = "Menu";

/// Separator between submenu names in the prompt
const BREADCRUMB_SEPARATOR: &str = " > ";

/// How a navigation session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEnd {
    /// Cancelled at the top level
    Cancelled,
    /// The presenter asked to end the session
    Quit,
}

/// Whether navigation continues after running an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the navigation loop until the user backs out of the top level.
///
/// After a leaf has run, the same level is presented again.
pub fn navigate(
    launcher: &mut Launcher<'_>,
    tree: &MenuTree,
) -> Result<NavigationEnd, SessionError> {
    let mut stack: Vec<(&str, &[MenuEntry])> = vec![(ROOT_PROMPT, &tree.roots)];

    loop {
        let Some(&(_, level)) = stack.last() else {
            return Ok(NavigationEnd::Cancelled);
        };

        let prompt = breadcrumb(&stack);
        let selection = launcher
            .presenter
            .show_menu(&prompt, &labels(level))
            .map_err(SessionError::Presenter)?;
        debug!(depth = stack.len(), ?selection, "menu selection");

        match selection {
            Selection::Quit => return Ok(NavigationEnd::Quit),
            Selection::Cancel => {
                if stack.len() == 1 {
                    debug!("nothing selected at root level");
                    return Ok(NavigationEnd::Cancelled);
                }
                stack.pop();
            }
            Selection::Index(index) => match level.get(index) {
                None => {
                    warn!(index, len = level.len(), "selection out of range, presenting again");
                }
                Some(MenuEntry::Submenu(node)) => {
                    stack.push((&node.display, &node.children));
                }
                Some(MenuEntry::Item(item)) => {
                    if run_item(launcher, item)? == Flow::Quit {
                        return Ok(NavigationEnd::Quit);
                    }
                }
            },
        }
    }
}

/// Run a leaf and act on its flags.
pub fn run_item(launcher: &mut Launcher<'_>, item: &MenuItem) -> Result<Flow, SessionError> {
    let argv = resolve_argv(&item.command, launcher.ctx.home.as_deref());
    let Some(result) = execute(launcher, &argv)? else {
        return Ok(Flow::Continue);
    };

    let outcome = classify(&item.flags, &result);
    if outcome == Outcome::ExpandScriptMenu {
        return expand_script_menu(
            launcher,
            &argv,
            &result.stdout_text,
            &item.flags,
            &item.display,
        );
    }

    report(
        outcome,
        &item.display,
        &result,
        launcher.ctx,
        &mut *launcher.notifier,
    )
    .map_err(SessionError::Notifier)?;
    Ok(Flow::Continue)
}

/// Run `argv`; a failure to run is reported in a dialog and yields `None`.
pub(crate) fn execute(
    launcher: &mut Launcher<'_>,
    argv: &[String],
) -> Result<Option<ExecutionResult>, SessionError> {
    let command = argv.join(" ");
    info!(command = %command, "execute");

    match launcher.runner.run(argv) {
        Ok(result) => {
            info!(command = %command, exit_code = result.exit_code, "done");
            Ok(Some(result))
        }
        Err(err) => {
            warn!(command = %command, error = %err, "command could not be executed");
            let messages = &launcher.ctx.messages;
            launcher
                .notifier
                .dialog(
                    messages.get(MessageId::ExecutionTitle),
                    &messages.format(MessageId::ExecutionFailed, &[("command", &command)]),
                )
                .map_err(SessionError::Notifier)?;
            Ok(None)
        }
    }
}

fn breadcrumb(stack: &[(&str, &[MenuEntry])]) -> String {
    stack
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(BREADCRUMB_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::command_runner::MockRunner;
    use crate::domain::ports::{Alert, RecordingNotifier, ScriptedPresenter};
    use crate::domain::services::SessionContext;
    use crate::parser::parse_menu;
    use std::path::PathBuf;

    struct Harness {
        presenter: ScriptedPresenter,
        runner: MockRunner,
        notifier: RecordingNotifier,
        ctx: SessionContext,
    }

    impl Harness {
        fn new(picks: &[Selection], runner: MockRunner) -> Self {
            Self {
                presenter: ScriptedPresenter::new(picks.iter().copied()),
                runner,
                notifier: RecordingNotifier::new(),
                ctx: SessionContext::default(),
            }
        }

        fn navigate(&mut self, menu: &str) -> NavigationEnd {
            let tree = parse_menu(menu).unwrap();
            let mut launcher = Launcher::new(
                &mut self.presenter,
                &mut self.runner,
                &mut self.notifier,
                &self.ctx,
            );
            navigate(&mut launcher, &tree).unwrap()
        }

        fn prompts(&self) -> Vec<&str> {
            self.presenter.shown.iter().map(|(p, _)| p.as_str()).collect()
        }
    }

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cancel_at_root_ends_without_running_anything() {
        let mut h = Harness::new(&[Selection::Cancel], MockRunner::new());
        let end = h.navigate("A::ls\n");

        assert_eq!(end, NavigationEnd::Cancelled);
        assert!(h.runner.calls.is_empty());
        assert_eq!(h.presenter.shown.len(), 1);
    }

    #[test]
    fn submenu_then_item_runs_command_and_notifies() {
        let mut h = Harness::new(
            &[Selection::Index(0), Selection::Index(0)],
            MockRunner::new().then_ok(0, "a\n", ""),
        );
        h.navigate("Go:submenu:\nA:notify:echo a\nsubend::\n");

        assert_eq!(h.runner.calls, vec![argv(&["echo", "a"])]);
        assert_eq!(
            h.notifier.alerts,
            vec![Alert::Notification {
                title: "A".to_string(),
                body: "a".to_string(),
                icon: None,
            }]
        );
        // root, submenu, submenu again after the run, then cancels back out
        assert_eq!(h.prompts(), vec!["Menu", "Menu > Go", "Menu > Go", "Menu"]);
        assert_eq!(h.presenter.shown[1].1, vec!["A"]);
    }

    #[test]
    fn cancel_in_submenu_pops_one_level() {
        let mut h = Harness::new(
            &[
                Selection::Index(0),
                Selection::Index(0),
                Selection::Cancel,
                Selection::Cancel,
            ],
            MockRunner::new(),
        );
        let end = h.navigate("Outer:submenu:\nInner:submenu:\nx::ls\ne:subend:\ne:subend:\n");

        assert_eq!(end, NavigationEnd::Cancelled);
        assert_eq!(
            h.prompts(),
            vec!["Menu", "Menu > Outer", "Menu > Outer > Inner", "Menu > Outer", "Menu"]
        );
    }

    #[test]
    fn quit_ends_session_from_any_depth() {
        let mut h = Harness::new(&[Selection::Index(0), Selection::Quit], MockRunner::new());
        let end = h.navigate("Go:submenu:\nA::ls\nsubend::\n");
        assert_eq!(end, NavigationEnd::Quit);
        assert_eq!(h.presenter.shown.len(), 2);
    }

    #[test]
    fn out_of_range_selection_presents_again() {
        let mut h = Harness::new(&[Selection::Index(7)], MockRunner::new());
        h.navigate("A::ls\n");
        assert_eq!(h.presenter.shown.len(), 2);
        assert!(h.runner.calls.is_empty());
    }

    #[test]
    fn item_stays_on_same_level_for_another_selection() {
        let mut h = Harness::new(
            &[Selection::Index(1), Selection::Index(0)],
            MockRunner::new().then_ok(0, "", "").then_ok(0, "", ""),
        );
        h.navigate("A::true\nB::false\n");
        assert_eq!(h.runner.calls, vec![argv(&["false"]), argv(&["true"])]);
        assert_eq!(h.prompts(), vec!["Menu", "Menu", "Menu"]);
    }

    #[test]
    fn spawn_failure_shows_dialog_and_keeps_menu_open() {
        let mut h = Harness::new(
            &[Selection::Index(0)],
            MockRunner::new().then_spawn_error("No such file or directory"),
        );
        let end = h.navigate("Broken:show:/nonexistent/tool --flag\n");

        assert_eq!(end, NavigationEnd::Cancelled);
        assert_eq!(
            h.notifier.dialogs().collect::<Vec<_>>(),
            vec![("Error", "Could not execute: /nonexistent/tool --flag")]
        );
        assert_eq!(h.presenter.shown.len(), 2);
    }

    #[test]
    fn exitcode_mismatch_dialog() {
        let mut h = Harness::new(
            &[Selection::Index(0)],
            MockRunner::new().then_ok(4, "", "bad"),
        );
        h.navigate("Check:exitcode 0,show:check-things\n");
        assert_eq!(
            h.notifier.dialogs().collect::<Vec<_>>(),
            vec![("Error", "Check finished with exit code 4")]
        );
    }

    #[test]
    fn show_flag_displays_combined_output() {
        let mut h = Harness::new(
            &[Selection::Index(0)],
            MockRunner::new().then_ok(0, "out\n", "warn\n"),
        );
        h.navigate("Status:show:status\n");
        assert_eq!(
            h.notifier.dialogs().collect::<Vec<_>>(),
            vec![("Output", "out\nwarn")]
        );
    }

    #[test]
    fn tilde_is_expanded_with_session_home() {
        let mut h = Harness::new(&[Selection::Index(0)], MockRunner::new().then_ok(0, "", ""));
        h.ctx.home = Some(PathBuf::from("/home/kodi"));
        h.navigate("Backup::~/bin/backup.sh ~\n");
        assert_eq!(
            h.runner.calls,
            vec![argv(&["/home/kodi/bin/backup.sh", "/home/kodi"])]
        );
    }

    #[test]
    fn scriptmenu_flow_reinvokes_with_chosen_line() {
        let mut h = Harness::new(
            &[Selection::Index(0), Selection::Index(1)],
            MockRunner::new()
                .then_ok(0, "opt1\nopt2\n", "")
                .then_ok(0, "picked opt2", ""),
        );
        h.navigate("Pick:scriptmenu,notify:list-things --all\n");

        assert_eq!(
            h.runner.calls,
            vec![
                argv(&["list-things", "--all"]),
                argv(&["list-things", "--all", "opt2"]),
            ]
        );
        assert_eq!(h.presenter.shown[1], ("Pick".to_string(), argv(&["opt1", "opt2"])));
        assert_eq!(
            h.notifier.notifications().collect::<Vec<_>>(),
            vec![("Pick", "picked opt2")]
        );
    }

    #[test]
    fn deep_menu_navigation_uses_heap_stack() {
        let depth = 2_000;
        let mut text = String::new();
        for i in 0..depth {
            text.push_str(&format!("level {}:submenu:\n", i));
        }
        text.push_str("leaf::true\n");
        for _ in 0..depth {
            text.push_str("end:subend:\n");
        }

        let picks = vec![Selection::Index(0); depth];
        let mut h = Harness::new(&picks, MockRunner::new());
        let end = h.navigate(&text);

        assert_eq!(end, NavigationEnd::Cancelled);
        // descend `depth` levels, then cancel back out of each one
        assert_eq!(h.presenter.shown.len(), 2 * depth + 1);
        assert_eq!(h.presenter.shown[depth].1, vec!["leaf"]);
    }
}
