//! Menu file parser
//!
//! Turns the flat `<display>:<flags>:<command>` line format into a
//! validated, nested [`MenuTree`]. Nesting is tracked with an explicit stack
//! of open submenus; the first error aborts the parse.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MenuFileError, ParseError, ParseResult};
use crate::models::{ItemFlags, MenuEntry, MenuItem, MenuTree, SubmenuNode};

/// Separator between the three columns of a line
const COLUMN_SEPARATOR: char = ':';

/// Separator between flag tokens
const FLAG_SEPARATOR: char = ',';

const COMMENT_PREFIX: char = '#';

const FLAG_SUBMENU: &str = "submenu";
const FLAG_SUBEND: &str = "subend";
const FLAG_NOTIFY: &str = "notify";
const FLAG_SHOW: &str = "show";
const FLAG_SCRIPTMENU: &str = "scriptmenu";
const FLAG_EXITCODE: &str = "exitcode";

/// What a single data line contributes to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    OpenSubmenu { display: String },
    CloseSubmenu,
    Item(MenuItem),
}

/// A submenu whose `subend` has not been seen yet.
struct OpenSubmenu {
    display: String,
    source_line: usize,
    children: Vec<MenuEntry>,
}

/// Parse menu text into a tree.
///
/// # Example
/// ```text
/// # comment
/// Tools:submenu:
/// Disk usage:show:df -h
/// Reboot:exitcode 0,notify:sudo reboot
/// end:subend:
/// ```
pub fn parse_menu(text: &str) -> ParseResult<MenuTree> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut roots: Vec<MenuEntry> = Vec::new();
    let mut open: Vec<OpenSubmenu> = Vec::new();

    for (index, raw) in menu_lines(text).enumerate() {
        let line_no = index + 1;
        let Some(kind) = parse_line(raw, line_no)? else {
            continue;
        };

        match kind {
            LineKind::OpenSubmenu { display: label } => {
                debug!(line = line_no, label = %label, "open submenu");
                open.push(OpenSubmenu {
                    display: label,
                    source_line: line_no,
                    children: Vec::new(),
                });
            }
            LineKind::CloseSubmenu => {
                let closed = open
                    .pop()
                    .ok_or(ParseError::UnmatchedSubend { line: line_no })?;
                debug!(line = line_no, opened = closed.source_line, "close submenu");
                let node = MenuEntry::Submenu(SubmenuNode {
                    display: closed.display,
                    children: closed.children,
                    source_line: closed.source_line,
                });
                current_level(&mut roots, &mut open).push(node);
            }
            LineKind::Item(item) => {
                current_level(&mut roots, &mut open).push(MenuEntry::Item(item));
            }
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ParseError::UnterminatedSubmenu {
            line: unclosed.source_line,
        });
    }

    Ok(MenuTree::new(roots))
}

/// Read and parse a menu file.
///
/// File access problems are classified so each can be reported with its own
/// message; the file is read fresh on every call.
pub fn load_menu_file(path: &Path) -> Result<MenuTree, MenuFileError> {
    if path.is_dir() {
        return Err(MenuFileError::IsADirectory {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| MenuFileError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        MenuFileError::from_io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;

    let tree = parse_menu(&text)?;
    debug!(
        path = %path.display(),
        entries = tree.len(),
        depth = tree.depth(),
        "menu file parsed"
    );
    Ok(tree)
}

/// Physical lines, ended by `\n`, `\r\n` or a lone `\r`.
fn menu_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(end) => {
                let skip = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[end + skip..]).filter(|r| !r.is_empty());
                Some(&current[..end])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

/// Parse one physical line. Blank lines and comments yield `None`.
fn parse_line(raw: &str, line_no: usize) -> ParseResult<Option<LineKind>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let columns: Vec<&str> = line.splitn(3, COLUMN_SEPARATOR).collect();
    let [display, flags_str, command] = columns.as_slice() else {
        return Err(ParseError::Structural {
            line: line_no,
            content: line.to_string(),
        });
    };
    let (display, flags_str, command) = (display.trim(), flags_str.trim(), command.trim());

    if display.is_empty() {
        return Err(ParseError::EmptyDisplay { line: line_no });
    }

    let raw_flags: Vec<&str> = flags_str
        .split(FLAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    // `subend::` is accepted as a bare closing marker.
    if raw_flags.is_empty() && command.is_empty() && display == FLAG_SUBEND {
        return Ok(Some(LineKind::CloseSubmenu));
    }

    if raw_flags.contains(&FLAG_SUBMENU) {
        ensure_sole_flag(&raw_flags, FLAG_SUBMENU, line_no)?;
        return Ok(Some(LineKind::OpenSubmenu {
            display: display.to_string(),
        }));
    }
    if raw_flags.contains(&FLAG_SUBEND) {
        ensure_sole_flag(&raw_flags, FLAG_SUBEND, line_no)?;
        return Ok(Some(LineKind::CloseSubmenu));
    }

    let flags = parse_item_flags(&raw_flags, line_no)?;
    if command.is_empty() {
        return Err(ParseError::EmptyCommand { line: line_no });
    }

    Ok(Some(LineKind::Item(MenuItem {
        display: display.to_string(),
        command: command.to_string(),
        flags,
        source_line: line_no,
    })))
}

/// `submenu` and `subend` must stand alone on their line.
fn ensure_sole_flag(tokens: &[&str], modal: &str, line_no: usize) -> ParseResult<()> {
    if tokens.len() > 1 {
        return Err(ParseError::FlagConflict {
            line: line_no,
            flag: modal.to_string(),
        });
    }
    Ok(())
}

/// Fold non-modal flag tokens into [`ItemFlags`].
fn parse_item_flags(tokens: &[&str], line_no: usize) -> ParseResult<ItemFlags> {
    let mut flags = ItemFlags::default();

    for &token in tokens {
        match token {
            FLAG_NOTIFY => flags.notify = true,
            FLAG_SHOW => flags.show = true,
            FLAG_SCRIPTMENU => flags.is_scriptmenu = true,
            t if t.starts_with(FLAG_EXITCODE) => {
                let value = parse_exitcode(t).ok_or_else(|| ParseError::InvalidExitcode {
                    line: line_no,
                    token: t.to_string(),
                })?;
                if flags.exitcode.is_some() {
                    return Err(ParseError::DuplicateExitcode { line: line_no });
                }
                flags.exitcode = Some(value);
            }
            other => {
                return Err(ParseError::UnknownFlag {
                    line: line_no,
                    token: other.to_string(),
                })
            }
        }
    }

    Ok(flags)
}

/// `exitcode`, at least one whitespace character, then ASCII digits only.
fn parse_exitcode(token: &str) -> Option<i32> {
    let rest = token.strip_prefix(FLAG_EXITCODE)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let value = rest.trim_start();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Children list of the innermost open submenu, or the top level.
fn current_level<'a>(
    roots: &'a mut Vec<MenuEntry>,
    open: &'a mut [OpenSubmenu],
) -> &'a mut Vec<MenuEntry> {
    match open.last_mut() {
        Some(submenu) => &mut submenu.children,
        None => roots,
    }
}
