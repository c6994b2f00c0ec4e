//! Subcommand implementations

pub mod check;
pub mod run;

/// Process exit codes.
pub mod exit {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
    /// `run` needs a terminal and none is attached
    pub const NO_TERMINAL: i32 = 2;
}

use shellmenu::config::LoadedConfig;
use shellmenu::ui::json::emit;

/// Surface config warnings on stderr, or as events in JSON mode.
pub(crate) fn report_config_warnings(loaded: &LoadedConfig, json: bool) {
    for warning in &loaded.warnings {
        if json {
            let _ = emit(&serde_json::json!({
                "event": "warning",
                "key": warning.key,
                "file": warning.file.display().to_string(),
                "line": warning.line,
                "suggestion": warning.suggestion,
            }));
        } else {
            eprintln!("Warning: {}", warning);
        }
    }
}
