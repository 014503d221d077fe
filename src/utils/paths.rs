use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".budget_calc";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

pub const HOME_ENV: &str = "BUDGET_CALC_HOME";

/// Returns the application data directory, defaulting to `~/.budget_calc`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_DIR)
}

/// Canonical location of the preferences file under `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    config_dir_in(base).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_file_lives_under_config_dir() {
        let path = config_file_in(Path::new("/tmp/base"));
        assert_eq!(path, Path::new("/tmp/base/config/config.json"));
    }
}
