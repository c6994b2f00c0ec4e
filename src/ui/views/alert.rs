use crossterm::style::Stylize;

use crate::ui::theme;
use crate::ui::widgets::{Frame, FrameStyle};

const CONTINUE_HINT: &str = "Press Enter to continue";

/// Blocking dialog: a framed message followed by the continue hint.
pub fn render_dialog(
    title: &str,
    body: &str,
    width: u16,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut frame = Frame::new(FrameStyle::Info)
        .title(title)
        .max_width(usize::from(width));
    frame.push(body);

    let mut out = frame.render(supports_color, supports_unicode);
    if supports_color {
        out.push_str(&format!("{}", CONTINUE_HINT.with(theme::colors::DIM)));
    } else {
        out.push_str(CONTINUE_HINT);
    }
    out
}

/// Toast: a single line, multi-line bodies joined with ` | `.
pub fn render_notification(
    title: &str,
    body: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = if supports_unicode {
        theme::icons::NOTIFY
    } else {
        theme::icons_ascii::NOTIFY
    };
    let body = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    if supports_color {
        format!(
            "{} {}: {}",
            icon.with(theme::colors::INFO),
            title.bold(),
            body
        )
    } else {
        format!("{} {}: {}", icon, title, body)
    }
}
