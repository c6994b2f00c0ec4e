use std::path::Path;

use anyhow::Result;
use tracing::info;

use shellmenu::application::{run_session, SessionEnd};
use shellmenu::config;
use shellmenu::domain::ports::{MenuPresenter, Notifier, ScriptedPresenter};
use shellmenu::domain::services::{Launcher, NavigationEnd, SessionContext};
use shellmenu::infrastructure::{
    shellmenu_home_dir, DialoguerPresenter, JsonNotifier, ProcessRunner, TerminalNotifier,
};
use shellmenu::messages::Messages;
use shellmenu::ui::json::emit;
use shellmenu::ui::{detect_capabilities, LauncherTheme};

use super::exit;
use crate::cli::{Picks, RunArgs};

pub fn cmd_run(args: RunArgs, config_path: Option<&Path>, json: bool) -> Result<i32> {
    let loaded = config::load(config_path)?;
    super::report_config_warnings(&loaded, json);

    let mut config = loaded.config;
    if let Some(menu_file) = args.menu_file {
        config.menu_file = menu_file;
    }
    if let Some(secs) = args.timeout {
        config.command_timeout_secs = Some(secs);
    }

    let home = shellmenu_home_dir();
    let (messages, _) = Messages::with_overrides(&config.messages);
    let ctx = SessionContext {
        notify_icon: config.notify_icon(home.as_deref()),
        messages,
        home,
    };
    let menu_path = config.menu_file_path(ctx.home.as_deref());
    let caps = detect_capabilities();

    let mut presenter: Box<dyn MenuPresenter> = match args.select {
        Some(Picks(picks)) => Box::new(ScriptedPresenter::new(picks)),
        None if !caps.stdin_is_tty => {
            eprintln!("shellmenu needs an interactive terminal.");
            eprintln!("Use 'shellmenu run --select <picks>' to navigate without one,");
            eprintln!("or 'shellmenu check' to validate the menu file.");
            return Ok(exit::NO_TERMINAL);
        }
        None => Box::new(DialoguerPresenter::new(LauncherTheme::new(
            caps.supports_unicode,
            caps.supports_color,
        ))),
    };
    let mut notifier: Box<dyn Notifier> = if json {
        Box::new(JsonNotifier::stdout())
    } else {
        Box::new(TerminalNotifier::stdio(caps))
    };
    let mut runner = ProcessRunner::with_timeout(config.command_timeout());

    info!(
        menu = %menu_path.display(),
        timeout = ?runner.timeout(),
        "starting session"
    );
    let end = {
        let mut launcher =
            Launcher::new(presenter.as_mut(), &mut runner, notifier.as_mut(), &ctx);
        run_session(&menu_path, &mut launcher)?
    };
    info!(?end, "session finished");

    if json {
        emit(&serde_json::json!({
            "event": "session_end",
            "outcome": outcome_name(end),
        }))?;
    }

    Ok(if end.is_failure() { exit::ERROR } else { exit::OK })
}

fn outcome_name(end: SessionEnd) -> &'static str {
    match end {
        SessionEnd::Navigated(NavigationEnd::Cancelled) => "cancelled",
        SessionEnd::Navigated(NavigationEnd::Quit) => "quit",
        SessionEnd::MenuUnavailable => "menu_unavailable",
        SessionEnd::MenuEmpty => "menu_empty",
    }
}
