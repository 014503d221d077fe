//! Persistent user preferences.
//!
//! Only presentation preferences are stored here. Budget entries live for a
//! single session and are never written to disk.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{
    currency::{FormatOptions, NegativeStyle},
    domain::Multiplier,
    errors::BudgetError,
    utils::paths,
};

const TMP_SUFFIX: &str = "tmp";

/// Look of interactive prompts and selection menus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PromptTheme {
    #[default]
    Colorful,
    Simple,
}

impl PromptTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            PromptTheme::Colorful => "colorful",
            PromptTheme::Simple => "simple",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub default_multiplier: Multiplier,
    pub negative_style: NegativeStyle,
    pub group_thousands: bool,
    pub plain_output: bool,
    pub theme: PromptTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            default_multiplier: Multiplier::default(),
            negative_style: NegativeStyle::Sign,
            group_thousands: false,
            plain_output: false,
            theme: PromptTheme::Colorful,
        }
    }
}

impl Config {
    pub const KEYS: &'static [&'static str] = &[
        "currency_symbol",
        "default_multiplier",
        "negative_style",
        "group_thousands",
        "plain_output",
        "theme",
    ];

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            symbol: self.currency_symbol.clone(),
            negative_style: self.negative_style,
            group_thousands: self.group_thousands,
        }
    }

    /// Updates one preference from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        match key.to_lowercase().as_str() {
            "currency_symbol" => self.currency_symbol = value.trim().to_string(),
            "default_multiplier" => {
                let parsed: f64 = value.trim().parse().map_err(|_| {
                    BudgetError::InvalidInput(format!("`{}` is not a number", value))
                })?;
                self.default_multiplier = Multiplier::preset(parsed)?;
            }
            "negative_style" => {
                self.negative_style = match value.trim().to_lowercase().as_str() {
                    "sign" => NegativeStyle::Sign,
                    "parentheses" | "parens" => NegativeStyle::Parentheses,
                    other => {
                        return Err(BudgetError::InvalidInput(format!(
                            "negative_style must be `sign` or `parentheses`, got `{}`",
                            other
                        )))
                    }
                }
            }
            "group_thousands" => self.group_thousands = parse_flag(key, value)?,
            "plain_output" => self.plain_output = parse_flag(key, value)?,
            "theme" => {
                self.theme = match value.trim().to_lowercase().as_str() {
                    "colorful" | "default" => PromptTheme::Colorful,
                    "simple" => PromptTheme::Simple,
                    other => {
                        return Err(BudgetError::InvalidInput(format!(
                            "theme must be `colorful` or `simple`, got `{}`",
                            other
                        )))
                    }
                }
            }
            other => {
                return Err(BudgetError::InvalidInput(format!(
                    "unknown config key `{}`",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, BudgetError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(BudgetError::InvalidInput(format!(
            "{} must be `on` or `off`",
            key
        ))),
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        fs::create_dir_all(paths::config_dir_in(&base))?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let mut config: Config = serde_json::from_str(&data)
                .map_err(|err| BudgetError::ConfigError(err.to_string()))?;
            if Multiplier::preset(config.default_multiplier.value()).is_err() {
                warn!(
                    value = %config.default_multiplier,
                    "default_multiplier is not a preset, using the default"
                );
                config.default_multiplier = Multiplier::default();
            }
            Ok(config)
        } else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BudgetError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
