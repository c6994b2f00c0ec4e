//! shellmenu CLI - launch shell commands from a file-defined menu
//!
//! Usage: shellmenu [COMMAND]
//!
//! Commands:
//!   run     Open the menu (default)
//!   check   Validate a menu file and print its tree

mod cli;
mod commands;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::exit;

/// Log filter directives, e.g. `shellmenu=debug`.
const LOG_ENV_VAR: &str = "SHELLMENU_LOG";
/// `json` switches log lines to JSON.
const LOG_FORMAT_ENV_VAR: &str = "SHELLMENU_LOG_FORMAT";

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,shellmenu={}", level)));
    let is_json = matches!(
        std::env::var(LOG_FORMAT_ENV_VAR).ok().as_deref(),
        Some("json") | Some("JSON")
    );
    if is_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match dispatch(&mut cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "shellmenu error");
            eprintln!("Error: {:#}", e);
            exit::ERROR
        }
    };
    std::process::exit(code);
}

fn dispatch(cli: &mut Cli) -> anyhow::Result<i32> {
    let config = cli.config.clone();
    match cli.command_or_default() {
        Commands::Run(args) => commands::run::cmd_run(args, config.as_deref(), cli.json),
        Commands::Check { path } => commands::check::cmd_check(path, config.as_deref(), cli.json),
    }
}
