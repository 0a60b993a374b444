//! # theme-harvest
//!
//! Scrapes theme variables from FrankenUI and DaisyUI stylesheets, adds
//! Tailwind's design tokens, and writes everything as one JSON document.
//!
//! The work happens in three steps, each also available as its own binary:
//!
//! 1. [`pipeline::extract_frankenui`] → `frankenui_themes.json`
//! 2. [`pipeline::extract_daisyui`] → `daisyui_themes.json`
//! 3. [`pipeline::combine`] → `theme-extraction.json`
//!
//! Paths, theme catalogs and logging come from [`HarvestConfig`].

pub mod config;
pub mod error;
pub mod log_init;
pub mod pipeline;
pub mod report;

pub use config::HarvestConfig;
pub use error::{HarvestError, Result};

/// Installs the logger described by `config`.
pub fn init_logging(config: &HarvestConfig) -> Result<()> {
    log_init::init_logger(config.log_level_filter(), config.log_file.as_deref())?;
    Ok(())
}
