//! Theme tables.
//!
//! A [`ThemeTable`] maps theme names to themes in catalog order. Two theme
//! shapes are used: [`ModalTheme`] (separate light and dark variable sets)
//! and a bare [`VariableSet`] for frameworks that ship one file per theme.

use cssvars::VariableSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark variant of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme with a variable set per mode.
///
/// Serializes as `{"light": {...}, "dark": {...}}`; both keys are always
/// present, empty when the stylesheet had no block for that mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalTheme {
    #[serde(default)]
    pub light: VariableSet,
    #[serde(default)]
    pub dark: VariableSet,
}

impl ModalTheme {
    pub fn new(light: VariableSet, dark: VariableSet) -> Self {
        Self { light, dark }
    }

    pub fn get(&self, mode: Mode) -> &VariableSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// True when neither mode has any variables.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// Ordered mapping of theme name to theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTable<T> {
    themes: IndexMap<String, T>,
}

impl<T> Default for ThemeTable<T> {
    fn default() -> Self {
        Self {
            themes: IndexMap::new(),
        }
    }
}

impl<T> ThemeTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a theme. A replaced theme keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, theme: T) {
        self.themes.insert(name.into(), theme);
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.themes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.themes.iter().map(|(name, theme)| (name.as_str(), theme))
    }
}
