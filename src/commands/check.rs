use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use shellmenu::application::check_menu_file;
use shellmenu::config;
use shellmenu::error::MenuFileError;
use shellmenu::models::MenuTree;
use shellmenu::infrastructure::shellmenu_home_dir;
use shellmenu::ui::detect_capabilities;
use shellmenu::ui::json::emit;
use shellmenu::ui::views::check::{render_check_summary, render_menu_tree};

use super::exit;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum CheckEvent<'a> {
    CheckOk {
        path: &'a Path,
        entries: usize,
        items: usize,
        depth: usize,
        tree: &'a MenuTree,
    },
    CheckError {
        path: &'a Path,
        line: Option<usize>,
        message: String,
    },
}

pub fn cmd_check(path: Option<PathBuf>, config_path: Option<&Path>, json: bool) -> Result<i32> {
    let path = match path {
        Some(path) => path,
        None => {
            let loaded = config::load(config_path)?;
            super::report_config_warnings(&loaded, json);
            loaded
                .config
                .menu_file_path(shellmenu_home_dir().as_deref())
        }
    };

    match check_menu_file(&path) {
        Ok(report) => {
            if json {
                emit(&CheckEvent::CheckOk {
                    path: &report.path,
                    entries: report.entries,
                    items: report.items,
                    depth: report.depth,
                    tree: &report.tree,
                })?;
            } else {
                let caps = detect_capabilities();
                print!(
                    "{}",
                    render_menu_tree(&report.tree, caps.supports_color, caps.supports_unicode)
                );
                println!("{}", render_check_summary(&report.tree));
            }
            Ok(exit::OK)
        }
        Err(err) => {
            let line = match &err {
                MenuFileError::Parse(parse) => Some(parse.line()),
                _ => None,
            };
            if json {
                emit(&CheckEvent::CheckError {
                    path: &path,
                    line,
                    message: err.to_string(),
                })?;
            } else {
                eprintln!("Error: {}", err);
            }
            Ok(exit::ERROR)
        }
    }
}
