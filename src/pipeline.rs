//! The three harvest steps.
//!
//! Each step reads its inputs fresh, builds its output in memory and then
//! overwrites its output file. [`combine`] requires both intermediate files;
//! if either is missing it fails before writing anything.

use crate::config::HarvestConfig;
use crate::error::Result;
use cssvars::VariableSet;
use log::info;
use std::fs;
use themetable::{
    CombinedDocument, FlatBuild, FlatTableBuilder, ModalTableBuilder, ModalTheme, ThemeError,
    ThemeTable, merge, read_json, tailwind_tokens, write_json, write_modal_csv,
};

/// Scrapes FrankenUI's stylesheet into a light/dark table and writes it.
pub fn extract_frankenui(config: &HarvestConfig) -> Result<ThemeTable<ModalTheme>> {
    let css = fs::read_to_string(&config.frankenui_css).map_err(|source| ThemeError::Read {
        path: config.frankenui_css.clone(),
        source,
    })?;

    let builder = ModalTableBuilder::new(&css)
        .with_class_prefix(config.frankenui_class_prefix.as_str())
        .with_dark_class(config.dark_class.as_str())
        .with_root_theme(
            config.default_theme_name.as_str(),
            &config.default_theme_keys,
        );

    let table = if config.discover_frankenui_themes {
        builder.discover()
    } else {
        builder.build(&config.frankenui_themes)
    };

    write_json(&config.frankenui_output, &table)?;
    if config.write_csv {
        write_modal_csv(&config.frankenui_csv_output, &table)?;
    }
    Ok(table)
}

/// Reads one DaisyUI file per catalog theme and writes the flat table.
pub fn extract_daisyui(config: &HarvestConfig) -> Result<FlatBuild> {
    let build = FlatTableBuilder::new(config.daisyui_theme_template.as_str())
        .with_color_scheme(config.daisyui_color_scheme)
        .build(&config.daisyui_themes);

    write_json(&config.daisyui_output, &build.table)?;
    Ok(build)
}

/// Merges the two intermediate tables with the Tailwind tokens.
pub fn combine(config: &HarvestConfig) -> Result<CombinedDocument> {
    let frankenui: ThemeTable<ModalTheme> = read_json(&config.frankenui_output)?;
    let daisyui: ThemeTable<VariableSet> = read_json(&config.daisyui_output)?;

    let document = merge(frankenui, daisyui, tailwind_tokens().clone());
    write_json(&config.combined_output, &document)?;
    Ok(document)
}

/// Outputs of a full run.
#[derive(Debug)]
pub struct Harvest {
    pub frankenui: ThemeTable<ModalTheme>,
    pub daisyui: FlatBuild,
    pub combined: CombinedDocument,
}

/// Runs all three steps in order.
pub fn run_all(config: &HarvestConfig) -> Result<Harvest> {
    let frankenui = extract_frankenui(config)?;
    let daisyui = extract_daisyui(config)?;
    let combined = combine(config)?;
    info!(
        "harvested {} FrankenUI and {} DaisyUI themes",
        combined.metadata.frankenui_theme_count, combined.metadata.daisyui_theme_count
    );
    Ok(Harvest {
        frankenui,
        daisyui,
        combined,
    })
}
