//! Error types for shellmenu
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//! Every variant carries structured context (line numbers, tokens, paths)
//! so callers can localize messages independently of error identity.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for menu parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// A menu file line that violates the grammar.
///
/// The parser stops at the first error; line numbers are 1-indexed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line does not split into exactly three `:`-separated fields
    #[error("line {line}: expected three ':' separated columns, found '{content}'")]
    Structural { line: usize, content: String },

    /// Display column is empty after trimming
    #[error("line {line}: display text cannot be empty")]
    EmptyDisplay { line: usize },

    /// `submenu` or `subend` combined with another flag
    #[error("line {line}: '{flag}' cannot be combined with other flags")]
    FlagConflict { line: usize, flag: String },

    /// Flag token that is not part of the grammar
    #[error(
        "line {line}: unknown flag '{token}' (allowed: submenu, subend, notify, show, scriptmenu, exitcode N)"
    )]
    UnknownFlag { line: usize, token: String },

    /// `exitcode` token that is not `exitcode <digits>`
    #[error("line {line}: invalid exitcode flag '{token}', use 'exitcode N' where N is a non-negative integer")]
    InvalidExitcode { line: usize, token: String },

    /// More than one `exitcode` on the same line
    #[error("line {line}: multiple 'exitcode' flags specified")]
    DuplicateExitcode { line: usize },

    /// Regular item without a command to run
    #[error("line {line}: command cannot be empty")]
    EmptyCommand { line: usize },

    /// `subend` while no submenu is open
    #[error("line {line}: 'subend' found without a matching 'submenu'")]
    UnmatchedSubend { line: usize },

    /// End of file reached with a submenu still open
    #[error("end of file reached, but the submenu started on line {line} was not closed with 'subend'")]
    UnterminatedSubmenu { line: usize },
}

impl ParseError {
    /// Line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Structural { line, .. }
            | ParseError::EmptyDisplay { line }
            | ParseError::FlagConflict { line, .. }
            | ParseError::UnknownFlag { line, .. }
            | ParseError::InvalidExitcode { line, .. }
            | ParseError::DuplicateExitcode { line }
            | ParseError::EmptyCommand { line }
            | ParseError::UnmatchedSubend { line }
            | ParseError::UnterminatedSubmenu { line } => *line,
        }
    }
}

/// Failure to turn a menu file on disk into a tree.
#[derive(Error, Debug)]
pub enum MenuFileError {
    #[error("menu file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("menu file is a directory: {path}")]
    IsADirectory { path: PathBuf },

    #[error("permission denied reading menu file: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("failed to read menu file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl MenuFileError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => MenuFileError::NotFound { path },
            std::io::ErrorKind::IsADirectory => MenuFileError::IsADirectory { path },
            std::io::ErrorKind::PermissionDenied => MenuFileError::PermissionDenied { path },
            _ => MenuFileError::Unreadable { path, source: err },
        }
    }
}

/// Failure to run an external command to completion.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("no command to execute")]
    EmptyCommand,

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect output of '{program}': {source}")]
    Collect {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {}s and was killed", .after.as_secs())]
    TimedOut { program: String, after: Duration },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Errors that end a navigation session early.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("menu presentation failed: {0}")]
    Presenter(#[source] std::io::Error),

    #[error("notification failed: {0}")]
    Notifier(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = ParseError::UnknownFlag {
            line: 4,
            token: "loud".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 4: unknown flag 'loud' (allowed: submenu, subend, notify, show, scriptmenu, exitcode N)"
        );
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn test_unterminated_submenu_points_at_opening_line() {
        let err = ParseError::UnterminatedSubmenu { line: 2 };
        assert_eq!(
            err.to_string(),
            "end of file reached, but the submenu started on line 2 was not closed with 'subend'"
        );
    }

    #[test]
    fn test_menu_file_error_classifies_io_kinds() {
        let nf = MenuFileError::from_io(
            "/x/menu.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(nf, MenuFileError::NotFound { .. }));

        let denied = MenuFileError::from_io(
            "/x/menu.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"),
        );
        assert!(matches!(denied, MenuFileError::PermissionDenied { .. }));

        let other = MenuFileError::from_io(
            "/x/menu.txt",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        );
        assert!(matches!(other, MenuFileError::Unreadable { .. }));
    }

    #[test]
    fn test_timed_out_display() {
        let err = ExecutionError::TimedOut {
            program: "sleep".to_string(),
            after: Duration::from_secs(3),
        };
        assert_eq!(err.to_string(), "'sleep' did not finish within 3s and was killed");
    }
}
