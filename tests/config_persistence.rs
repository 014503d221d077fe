mod common;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use budget_calc::config::{Config, ConfigManager};
use budget_calc::currency::NegativeStyle;
use budget_calc::Multiplier;
use common::{run_lines, setup_config_manager};

use budget_calc::cli::core::{CliMode, ShellContext};

#[test]
fn set_commands_write_the_config_file() {
    let manager = setup_config_manager();
    let mut context =
        ShellContext::with_config(CliMode::Script, Config::default(), Some(manager.clone()));
    run_lines(
        &mut context,
        &[
            "config set negative_style parentheses",
            "config set default_multiplier 1.25",
        ],
    );

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.negative_style, NegativeStyle::Parentheses);
    assert_eq!(reloaded.default_multiplier, Multiplier::preset(1.25).unwrap());
    // The running session keeps its current multiplier.
    assert_eq!(context.state.multiplier(), Multiplier::default());
}

#[test]
fn new_session_starts_from_configured_multiplier() {
    let manager = setup_config_manager();
    let mut config = Config::default();
    config.set_value("default_multiplier", "2").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    let mut context = ShellContext::with_config(CliMode::Script, loaded, Some(manager));
    run_lines(&mut context, &["expense Rent 1000"]);
    assert_eq!(context.state.expected_income(), 2000.0);
}

#[test]
fn rejected_set_leaves_file_untouched() {
    let manager = setup_config_manager();
    let mut context =
        ShellContext::with_config(CliMode::Script, Config::default(), Some(manager.clone()));
    assert!(context.execute_line("config set default_multiplier 3").is_err());
    assert!(!manager.path().exists());
}

#[test]
fn partial_config_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("config").child("config.json");
    file.write_str(r#"{ "currency_symbol": "£" }"#).unwrap();

    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let config = manager.load().unwrap();
    assert_eq!(config.currency_symbol, "£");
    assert_eq!(config.default_multiplier, Multiplier::default());
    assert!(!config.group_thousands);
}

#[test]
fn corrupt_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    temp.child("config")
        .child("config.json")
        .write_str("{ not json")
        .unwrap();

    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    assert!(manager.load().is_err());
}

#[test]
fn off_menu_multiplier_in_file_does_not_reach_the_session() {
    let temp = TempDir::new().unwrap();
    temp.child("config")
        .child("config.json")
        .write_str(r#"{ "default_multiplier": 3.0 }"#)
        .unwrap();

    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let config = manager.load().unwrap();
    let mut context = ShellContext::with_config(CliMode::Script, config, Some(manager));
    run_lines(&mut context, &["expense Rent 1000"]);
    assert_eq!(context.state.multiplier(), Multiplier::default());
    assert_eq!(context.state.expected_income(), 1500.0);
}
