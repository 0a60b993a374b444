//! Combined theme document.
//!
//! Merging is pure assembly: each framework occupies its own top-level key,
//! so there is nothing to reconcile. The metadata counts are computed from
//! the tables at merge time and can't drift from them.

use crate::error::ThemeError;
use crate::table::{ModalTheme, ThemeTable};
use crate::tokens::TailwindTokens;
use cssvars::VariableSet;
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DESCRIPTION: &str =
    "Complete theme extraction from MonsterUI (FrankenUI, DaisyUI, Tailwind CSS)";

/// Notes on the color notation each framework uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorFormats {
    pub frankenui: String,
    pub daisyui: String,
    pub tailwind: String,
}

impl Default for ColorFormats {
    fn default() -> Self {
        Self {
            frankenui: "HSL (H S% L%)".to_string(),
            daisyui: "OKLCH (oklch(L% C H))".to_string(),
            tailwind: "OKLCH (oklch(L% C H))".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub description: String,
    pub frankenui_theme_count: usize,
    pub daisyui_theme_count: usize,
    pub color_formats: ColorFormats,
}

/// The merged output: metadata followed by one key per framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedDocument {
    pub metadata: Metadata,
    pub frankenui: ThemeTable<ModalTheme>,
    pub daisyui: ThemeTable<VariableSet>,
    pub tailwind: TailwindTokens,
}

/// Assembles the combined document.
pub fn merge(
    frankenui: ThemeTable<ModalTheme>,
    daisyui: ThemeTable<VariableSet>,
    tailwind: TailwindTokens,
) -> CombinedDocument {
    CombinedDocument {
        metadata: Metadata {
            description: DESCRIPTION.to_string(),
            frankenui_theme_count: frankenui.len(),
            daisyui_theme_count: daisyui.len(),
            color_formats: ColorFormats::default(),
        },
        frankenui,
        daisyui,
        tailwind,
    }
}

/// Writes `value` as indented JSON, replacing whatever is at `path`.
///
/// Missing parent directories are created.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ThemeError> {
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ThemeError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Reads a JSON file written by [`write_json`].
///
/// A missing file is an error: callers read only inputs they require.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ThemeError> {
    let text = fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ThemeError::Json {
        path: path.to_path_buf(),
        source,
    })
}
