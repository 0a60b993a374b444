//! Theme table builders.
//!
//! Two source layouts are supported:
//!
//! - **Modal**: one stylesheet holds every theme as a pair of blocks,
//!   `.<prefix><name>` for light and `.<dark>.<prefix><name>` for dark
//!   (FrankenUI). Every catalog name gets an entry, empty or not.
//! - **Flat**: one file per theme, path templated by name (DaisyUI). Missing
//!   files are skipped and reported, never fatal.
//!
//! Catalogs are always passed in; the builders hold no theme names of their
//! own.

use crate::source::{ThemeSource, load_source};
use crate::table::{ModalTheme, ThemeTable};
use cssvars::{
    SelectorRule, VariableSet, class_names_with_prefix, extract_block, extract_block_filtered,
    extract_color_scheme, extract_document,
};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Builds a [`ThemeTable`] of light/dark themes from a single stylesheet.
#[derive(Debug, Clone)]
pub struct ModalTableBuilder<'a> {
    css: &'a str,
    class_prefix: String,
    dark_class: String,
    root_theme: Option<RootTheme>,
}

#[derive(Debug, Clone)]
struct RootTheme {
    name: String,
    allowed: Vec<String>,
}

impl<'a> ModalTableBuilder<'a> {
    /// Creates a builder over `css` with FrankenUI's naming: themes are
    /// `.uk-theme-<name>` and dark variants are qualified by `.dark`.
    pub fn new(css: &'a str) -> Self {
        Self {
            css,
            class_prefix: "uk-theme-".to_string(),
            dark_class: "dark".to_string(),
            root_theme: None,
        }
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }

    /// Appends a theme built from the stylesheet defaults: `:root` for light
    /// and the bare dark class for dark, keeping only names that contain one
    /// of `allowed`.
    pub fn with_root_theme<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = S>,
    ) -> Self {
        self.root_theme = Some(RootTheme {
            name: name.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Selector rules for the light and dark blocks of `name`.
    pub fn rules_for(&self, name: &str) -> (SelectorRule, SelectorRule) {
        let light = SelectorRule::class(&format!("{}{}", self.class_prefix, name));
        let dark = light.clone().qualified_by(&self.dark_class);
        (light, dark)
    }

    /// Extracts one theme. Missing blocks give empty variable sets.
    pub fn theme(&self, name: &str) -> ModalTheme {
        let (light, dark) = self.rules_for(name);
        ModalTheme::new(extract_block(self.css, &light), extract_block(self.css, &dark))
    }

    /// Builds a table with one entry per catalog name, plus the root theme if
    /// configured.
    pub fn build<S: AsRef<str>>(&self, names: &[S]) -> ThemeTable<ModalTheme> {
        let mut table = ThemeTable::new();
        for name in names {
            let name = name.as_ref();
            let theme = self.theme(name);
            if theme.is_empty() {
                debug!("theme `{name}` has no blocks in the stylesheet");
            }
            table.insert(name, theme);
        }

        if let Some(root) = &self.root_theme {
            table.insert(root.name.clone(), self.root(&root.allowed));
        }

        info!("built {} light/dark themes", table.len());
        table
    }

    /// Builds a table from every theme class found in the stylesheet.
    pub fn discover(&self) -> ThemeTable<ModalTheme> {
        let names = class_names_with_prefix(self.css, &self.class_prefix);
        debug!("discovered {} themes with prefix `{}`", names.len(), self.class_prefix);
        self.build(names.as_slice())
    }

    fn root(&self, allowed: &[String]) -> ModalTheme {
        let dark_rule = SelectorRule::class(&self.dark_class);
        ModalTheme::new(
            extract_block_filtered(self.css, &SelectorRule::root(), allowed),
            extract_block_filtered(self.css, &dark_rule, allowed),
        )
    }
}

/// Why a theme was left out of a flat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No file for the theme.
    Absent,
    /// The file exists but could not be read.
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: SkipReason,
}

/// Result of a flat build: the table and the themes that were left out.
#[derive(Debug, Clone, Default)]
pub struct FlatBuild {
    pub table: ThemeTable<VariableSet>,
    pub skipped: Vec<Skipped>,
}

/// Builds a [`ThemeTable`] from one CSS file per theme.
#[derive(Debug, Clone)]
pub struct FlatTableBuilder {
    path_template: String,
    color_scheme: bool,
}

impl FlatTableBuilder {
    /// `path_template` must contain `{name}`, replaced by each theme name.
    pub fn new(path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            color_scheme: false,
        }
    }

    /// Also record the file's `color-scheme` keyword under `color-scheme`.
    pub fn with_color_scheme(mut self, enabled: bool) -> Self {
        self.color_scheme = enabled;
        self
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        PathBuf::from(self.path_template.replace("{name}", name))
    }

    /// Builds the table by reading theme files from disk.
    pub fn build<S: AsRef<str>>(&self, names: &[S]) -> FlatBuild {
        self.build_with(names, load_source)
    }

    /// Builds the table with a custom loader, one call per catalog name.
    pub fn build_with<S, F>(&self, names: &[S], load: F) -> FlatBuild
    where
        S: AsRef<str>,
        F: Fn(&Path) -> ThemeSource,
    {
        let mut build = FlatBuild::default();

        for name in names {
            let name = name.as_ref();
            let path = self.path_for(name);
            match load(&path) {
                ThemeSource::Present(css) => {
                    build.table.insert(name, self.theme(&css));
                }
                ThemeSource::Absent => {
                    debug!("theme `{name}`: no file at {}", path.display());
                    build.skipped.push(Skipped {
                        name: name.to_string(),
                        reason: SkipReason::Absent,
                    });
                }
                ThemeSource::Malformed(reason) => {
                    warn!("theme `{name}`: skipping {}: {reason}", path.display());
                    build.skipped.push(Skipped {
                        name: name.to_string(),
                        reason: SkipReason::Malformed(reason),
                    });
                }
            }
        }

        info!(
            "built {} themes ({} skipped)",
            build.table.len(),
            build.skipped.len()
        );
        build
    }

    fn theme(&self, css: &str) -> VariableSet {
        let mut vars = extract_document(css);
        if self.color_scheme {
            if let Some(scheme) = extract_color_scheme(css) {
                vars.insert("color-scheme", scheme);
            }
        }
        vars
    }
}
