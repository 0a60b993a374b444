//! # themetable - theme tables and merged theme documents
//!
//! Builds per-framework theme tables out of scraped CSS variables and merges
//! them, together with a static token table, into one JSON document.
//!
//! - [`builder`]: [`ModalTableBuilder`] (one stylesheet, light/dark blocks per
//!   theme) and [`FlatTableBuilder`] (one file per theme)
//! - [`source`]: the [`ThemeSource`] tri-state for optional theme files
//! - [`table`]: [`ThemeTable`] and [`ModalTheme`]
//! - [`tokens`]: hardcoded Tailwind design tokens
//! - [`merge`]: the combined document and JSON file I/O
//! - [`export`]: CSV export of a light/dark table
//!
//! ## Example
//!
//! ```rust
//! use themetable::{ModalTableBuilder, merge, tailwind_tokens, ThemeTable};
//!
//! let css = ".uk-theme-zinc { --primary: 240 5.9% 10%; }";
//! let franken = ModalTableBuilder::new(css).build(&["zinc", "rose"]);
//! assert_eq!(franken.len(), 2);
//! assert!(franken.get("rose").unwrap().is_empty());
//!
//! let doc = merge(franken, ThemeTable::new(), tailwind_tokens().clone());
//! assert_eq!(doc.metadata.frankenui_theme_count, 2);
//! assert_eq!(doc.metadata.daisyui_theme_count, 0);
//! ```

pub mod builder;
pub mod error;
pub mod export;
pub mod merge;
pub mod source;
pub mod table;
pub mod tokens;

pub use builder::{FlatBuild, FlatTableBuilder, ModalTableBuilder, SkipReason, Skipped};
pub use error::ThemeError;
pub use export::write_modal_csv;
pub use merge::{ColorFormats, CombinedDocument, Metadata, merge, read_json, write_json};
pub use source::{ThemeSource, load_source};
pub use table::{Mode, ModalTheme, ThemeTable};
pub use tokens::{TailwindTokens, tailwind_tokens};
