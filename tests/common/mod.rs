//! Common test utilities for shellmenu CLI tests.
//!
//! `TestEnv` gives every test its own home and config directory and runs
//! the real binary against them.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the shellmenu binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// stdout parsed as NDJSON, one value per line
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})\n{}", self.stderr))
            })
            .collect()
    }
}

/// Isolated environment: a temp home and a temp config dir.
pub struct TestEnv {
    pub home: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Write `content` under the home directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the default menu file (`~/.shellmenu/menu.txt`).
    pub fn menu(&self, content: &str) -> PathBuf {
        self.write(".shellmenu/menu.txt", content)
    }

    /// Write an executable shell script under the home directory.
    #[cfg(unix)]
    pub fn script(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write(relative, &format!("#!/bin/sh\n{}\n", body));
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_shellmenu"));
        cmd.args(args)
            .current_dir(self.home.path())
            .stdin(Stdio::null())
            .env("HOME", self.home.path())
            .env("SHELLMENU_HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("LANG", "C")
            .env("NO_COLOR", "1")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("SHELLMENU_CONFIG")
            .env_remove("SHELLMENU_MENU_FILE")
            .env_remove("SHELLMENU_SKIN_DIR")
            .env_remove("SHELLMENU_TIMEOUT")
            .env_remove("SHELLMENU_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().unwrap())
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
