//! Menu file check use case

use std::path::{Path, PathBuf};

use crate::error::MenuFileError;
use crate::models::MenuTree;
use crate::parser::load_menu_file;

/// A successfully validated menu file.
#[derive(Debug)]
pub struct CheckReport {
    pub path: PathBuf,
    pub entries: usize,
    pub items: usize,
    pub depth: usize,
    pub tree: MenuTree,
}

/// Load and validate `path` without running anything.
pub fn check_menu_file(path: &Path) -> Result<CheckReport, MenuFileError> {
    let tree = load_menu_file(path)?;
    Ok(CheckReport {
        path: path.to_path_buf(),
        entries: tree.len(),
        items: tree.item_count(),
        depth: tree.depth(),
        tree,
    })
}
