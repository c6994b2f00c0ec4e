//! Menu Presenter Port
//!
//! Shows an ordered list of labels and reports what the user picked.
//! Implementations can be interactive (a terminal select list) or scripted
//! (a fixed list of picks, used for automation and tests).

use std::collections::VecDeque;
use std::io;
use std::str::FromStr;

/// Result of presenting one menu level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the labels that were shown
    Index(usize),
    /// Back out of the current level
    Cancel,
    /// End the whole session
    Quit,
}

/// Invalid token in a pick list such as `0,2,-,q`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selection '{0}' (expected an index, '-' or 'q')")]
pub struct SelectionParseError(pub String);

impl FromStr for Selection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" => Ok(Selection::Cancel),
            "q" | "quit" => Ok(Selection::Quit),
            other => other
                .parse::<usize>()
                .map(Selection::Index)
                .map_err(|_| SelectionParseError(other.to_string())),
        }
    }
}

impl Selection {
    /// Parse a comma-separated pick list.
    pub fn parse_list(list: &str) -> Result<Vec<Selection>, SelectionParseError> {
        list.split(',')
            .filter(|t| !t.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Trait for presenting one level of a menu.
pub trait MenuPresenter {
    /// Show `labels` in order under `prompt` and wait for a choice.
    fn show_menu(&mut self, prompt: &str, labels: &[&str]) -> io::Result<Selection>;
}

/// Presenter that replays a fixed list of picks.
///
/// Once the picks run out every further request is answered with
/// [`Selection::Cancel`], which walks navigation back to the root and ends it.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    picks: VecDeque<Selection>,
    /// Every `(prompt, labels)` pair that was presented, in order
    pub shown: Vec<(String, Vec<String>)>,
}

impl ScriptedPresenter {
    pub fn new(picks: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    /// Picks not consumed yet.
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl MenuPresenter for ScriptedPresenter {
    fn show_menu(&mut self, prompt: &str, labels: &[&str]) -> io::Result<Selection> {
        self.shown.push((
            prompt.to_string(),
            labels.iter().map(|l| l.to_string()).collect(),
        ));
        Ok(self.picks.pop_front().unwrap_or(Selection::Cancel))
    }
}
