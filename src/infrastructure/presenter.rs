//! Terminal Menu Presenter
//!
//! Draws one menu level as a `dialoguer` select list on stderr.

use std::io;

use dialoguer::Select;
use tracing::debug;

use crate::domain::ports::{MenuPresenter, Selection};
use crate::ui::LauncherTheme;

/// Interactive presenter: arrow keys and Enter pick, Esc or `q` backs out.
pub struct DialoguerPresenter {
    theme: LauncherTheme,
}

impl DialoguerPresenter {
    pub fn new(theme: LauncherTheme) -> Self {
        Self { theme }
    }
}

impl MenuPresenter for DialoguerPresenter {
    fn show_menu(&mut self, prompt: &str, labels: &[&str]) -> io::Result<Selection> {
        if labels.is_empty() {
            // A select list needs at least one entry; an empty submenu just backs out.
            debug!(prompt, "empty level, nothing to present");
            return Ok(Selection::Cancel);
        }

        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(labels)
            .default(0)
            .report(false)
            .interact_opt()
            .map_err(io::Error::other)?;

        Ok(choice.map_or(Selection::Cancel, Selection::Index))
    }
}
