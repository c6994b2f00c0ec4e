use crossterm::style::{Color, Stylize};
use dialoguer::theme::{ColorfulTheme, Theme};
use std::fmt;

/// Design tokens for the shellmenu UI.
///
/// All colors, icons and borders used by views and prompts come from here.
pub mod colors {
    use super::Color;

    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const POINTER: &str = "❯";
    pub const SUBMENU: &str = "▸";
    pub const NOTIFY: &str = "●";
    pub const ERROR: &str = "✗";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";
    pub const SUBMENU: &str = "+";
    pub const NOTIFY: &str = "*";
    pub const ERROR: &str = "[ERR]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Connectors for tree listings.
pub mod tree {
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const SPACE: &str = "    ";
}

pub mod tree_ascii {
    pub const BRANCH: &str = "|-- ";
    pub const LAST: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const SPACE: &str = "    ";
}

/// Select-list theme for menu levels.
///
/// Wraps `ColorfulTheme` and only replaces how list items are drawn, so
/// the active entry gets the shellmenu pointer (or `>` without Unicode).
pub struct LauncherTheme {
    unicode: bool,
    color: bool,
    inner: ColorfulTheme,
}

impl LauncherTheme {
    pub fn new(unicode: bool, color: bool) -> Self {
        Self {
            unicode,
            color,
            inner: ColorfulTheme::default(),
        }
    }

    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            icons::POINTER
        } else {
            icons_ascii::POINTER
        }
    }
}

impl Theme for LauncherTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if !active {
            return write!(f, "  {}", text);
        }
        if self.color {
            write!(
                f,
                "{} {}",
                self.pointer().with(colors::INFO),
                text.with(colors::INFO)
            )
        } else {
            write!(f, "{} {}", self.pointer(), text)
        }
    }
}
