use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameStyle {
    #[default]
    Info,
    Warning,
    Error,
}

/// A bordered block of text with an optional title row.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    title: Option<String>,
    rows: Vec<String>,
    max_width: Option<usize>,
    style: FrameStyle,
}

impl Frame {
    pub fn new(style: FrameStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Cap the total width, borders included. Longer rows are cut.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Add text; embedded newlines become separate rows.
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            self.rows.push(String::new());
        }
        self.rows.extend(text.lines().map(str::to_string));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (tl, tr, bl, br, h, v) = if supports_unicode {
            use theme::borders::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        } else {
            use theme::borders_ascii::*;
            (TOP_LEFT, TOP_RIGHT, BOTTOM_LEFT, BOTTOM_RIGHT, HORIZONTAL, VERTICAL)
        };

        let mut rows: Vec<Cow<'_, str>> = Vec::with_capacity(self.rows.len() + 2);
        if let Some(title) = &self.title {
            rows.push(Cow::Borrowed(title.as_str()));
            rows.push(Cow::Borrowed(""));
        }
        rows.extend(self.rows.iter().map(|r| Cow::Borrowed(r.as_str())));

        // Inner width excludes the two border columns and one space of padding per side.
        let natural = rows.iter().map(|r| visible_width(r)).max().unwrap_or(0);
        let inner = match self.max_width {
            Some(max) => natural.min(max.saturating_sub(4)),
            None => natural,
        };

        let paint = |s: &str| color_border(s, supports_color, self.style);
        let rule = h.repeat(inner + 2);

        let mut out = String::new();
        out.push_str(&paint(&format!("{}{}{}", tl, rule, tr)));
        out.push('\n');
        for row in &rows {
            let cell = truncate(row, inner);
            let pad = inner - visible_width(&cell);
            out.push_str(&paint(v));
            out.push(' ');
            out.push_str(&cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push_str(&paint(v));
            out.push('\n');
        }
        out.push_str(&paint(&format!("{}{}{}", bl, rule, br)));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: FrameStyle) -> String {
    if !supports_color {
        return s.to_string();
    }
    let color = match style {
        FrameStyle::Info => theme::colors::INFO,
        FrameStyle::Warning => theme::colors::WARNING,
        FrameStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` to at most `width` columns.
fn truncate(s: &str, width: usize) -> Cow<'_, str> {
    if s.width() <= width {
        return Cow::Borrowed(s);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    Cow::Owned(out)
}
