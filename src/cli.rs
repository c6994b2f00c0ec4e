use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shellmenu::domain::ports::{Selection, SelectionParseError};

/// shellmenu - launch shell commands from a file-defined menu
#[derive(Parser, Debug)]
#[command(name = "shellmenu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'shellmenu' without arguments to open the configured menu.")]
pub struct Cli {
    /// Config file (default: $SHELLMENU_CONFIG, then the per-user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of terminal dialogs
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the menu (default)
    Run(RunArgs),

    /// Validate a menu file and print its tree
    Check {
        /// Menu file (default: the configured one)
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Menu file to open instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub menu_file: Option<PathBuf>,

    /// Kill commands still running after this many seconds (0 = never)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Navigate non-interactively: comma-separated indexes, '-' to go back, 'q' to quit
    #[arg(long, value_name = "PICKS", value_parser = parse_picks)]
    pub select: Option<Picks>,
}

/// A scripted sequence of menu picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picks(pub Vec<Selection>);

fn parse_picks(raw: &str) -> Result<Picks, SelectionParseError> {
    Selection::parse_list(raw).map(Picks)
}

impl Cli {
    /// The subcommand to run; no subcommand means `run` with defaults.
    pub fn command_or_default(&mut self) -> Commands {
        self.command
            .take()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}
