use is_terminal::IsTerminal;

/// What the attached terminal can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdin is interactive, so a select list can read keys
    pub stdin_is_tty: bool,
    /// stderr is interactive; prompts and dialogs are drawn there
    pub stderr_is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdin().is_terminal(),
        std::io::stderr().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdin_is_tty: bool,
    stderr_is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        stdin_is_tty,
        stderr_is_tty,
        supports_color: stderr_is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        width: size.map(|(w, _)| w).unwrap_or(80),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    // The first locale variable that is set decides.
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(value) = get_env(key).filter(|v| !v.is_empty()) {
            let value = value.to_lowercase();
            return value.contains("utf-8") || value.contains("utf8");
        }
    }
    true
}
