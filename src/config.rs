//! Harvest configuration.
//!
//! Every setting has a default matching the layout of a MonsterUI checkout
//! (`vite/node_modules/...` relative to the working directory). A TOML file
//! can override any subset of fields:
//!
//! ```toml
//! frankenui_themes = ["zinc", "rose"]
//! write_csv = true
//! log_level = "debug"
//! ```
//!
//! The file is taken from `THEME_HARVEST_CONFIG` when set, otherwise from
//! `theme-harvest.toml` in the working directory if it exists.

use crate::error::{HarvestError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_ENV: &str = "THEME_HARVEST_CONFIG";
pub const CONFIG_FILE: &str = "theme-harvest.toml";

pub const FRANKENUI_THEMES: &[&str] = &[
    "zinc", "slate", "gray", "neutral", "blue", "red", "green", "orange", "yellow", "violet",
    "purple", "rose", "amber", "teal", "stone",
];

pub const DAISYUI_THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
];

/// Name fragments kept in the stylesheet-default theme.
pub const DEFAULT_THEME_KEYS: &[&str] = &[
    "--background",
    "--foreground",
    "--primary",
    "--secondary",
    "--muted",
    "--accent",
    "--destructive",
    "--border",
    "--input",
    "--ring",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarvestConfig {
    /// The combined FrankenUI stylesheet. Required.
    pub frankenui_css: PathBuf,
    /// Path of one DaisyUI theme file, with `{name}` for the theme name.
    pub daisyui_theme_template: String,

    pub frankenui_output: PathBuf,
    pub frankenui_csv_output: PathBuf,
    pub daisyui_output: PathBuf,
    pub combined_output: PathBuf,

    pub frankenui_themes: Vec<String>,
    pub daisyui_themes: Vec<String>,
    pub default_theme_name: String,
    pub default_theme_keys: Vec<String>,

    pub frankenui_class_prefix: String,
    pub dark_class: String,
    /// Take FrankenUI theme names from the stylesheet instead of the catalog.
    pub discover_frankenui_themes: bool,
    /// Record each DaisyUI theme's `color-scheme`.
    pub daisyui_color_scheme: bool,
    /// Also write the FrankenUI table as CSV.
    pub write_csv: bool,

    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            frankenui_css: PathBuf::from("vite/node_modules/franken-ui/dist/css/franken-ui.css"),
            daisyui_theme_template: "vite/node_modules/daisyui/theme/{name}.css".to_string(),
            frankenui_output: PathBuf::from("frankenui_themes.json"),
            frankenui_csv_output: PathBuf::from("frankenui_themes.csv"),
            daisyui_output: PathBuf::from("daisyui_themes.json"),
            combined_output: PathBuf::from("theme-extraction.json"),
            frankenui_themes: to_strings(FRANKENUI_THEMES),
            daisyui_themes: to_strings(DAISYUI_THEMES),
            default_theme_name: "default".to_string(),
            default_theme_keys: to_strings(DEFAULT_THEME_KEYS),
            frankenui_class_prefix: "uk-theme-".to_string(),
            dark_class: "dark".to_string(),
            discover_frankenui_themes: false,
            daisyui_color_scheme: true,
            write_csv: false,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl HarvestConfig {
    /// Loads the configuration for this process.
    ///
    /// Falls back to defaults when no config file is present. A config file
    /// that exists but can't be read or parsed is an error.
    pub fn load() -> Result<Self> {
        match config_path(std::env::var_os(CONFIG_ENV), Path::new(".")) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HarvestError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| HarvestError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured log level, `warn` if it doesn't parse.
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }
}

/// Picks the config file: the `THEME_HARVEST_CONFIG` value when set, else
/// `theme-harvest.toml` in `dir` if it is a file.
pub fn config_path(env_value: Option<OsString>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = env_value {
        return Some(PathBuf::from(path));
    }
    let local = dir.join(CONFIG_FILE);
    local.is_file().then_some(local)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
