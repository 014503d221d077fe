#![allow(dead_code)]

use std::sync::Mutex;

use budget_calc::cli::core::{CliMode, ShellContext};
use budget_calc::config::{Config, ConfigManager};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager rooted in a fresh temporary directory.
pub fn setup_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

/// Script-mode shell context with default preferences and no persistence.
pub fn script_context() -> ShellContext {
    ShellContext::with_config(CliMode::Script, Config::default(), None)
}

/// Runs each line through the shell, panicking on command errors.
pub fn run_lines(context: &mut ShellContext, lines: &[&str]) {
    for line in lines {
        context
            .execute_line(line)
            .unwrap_or_else(|err| panic!("`{line}` failed: {err}"));
    }
}
