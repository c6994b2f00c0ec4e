//! Command line resolution
//!
//! A menu command is split on whitespace; each token gets a leading `~`
//! expanded. There is no quoting, escaping or globbing.

use std::path::Path;

/// Split `command` into an argv, expanding `~` per token.
pub fn resolve_argv(command: &str, home: Option<&Path>) -> Vec<String> {
    command
        .split_whitespace()
        .map(|token| expand_tilde(token, home))
        .collect()
}

/// Expand `~` and `~/...` to the home directory.
///
/// `~user` forms and tokens seen without a known home are returned as-is.
pub fn expand_tilde(token: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return token.to_string();
    };

    if token == "~" {
        return home.to_string_lossy().into_owned();
    }
    match token.strip_prefix("~/") {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => token.to_string(),
    }
}
