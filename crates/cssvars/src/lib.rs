//! # cssvars - CSS custom property extraction
//!
//! Pulls theme variables (`--name: value;`) out of framework stylesheets.
//! The crate understands just enough CSS to find the block a theme lives in:
//!
//! - **Blocks**: a bracket-depth scanner ([`scan_blocks`](parser::blocks::scan_blocks))
//!   that walks every `{ ... }` block, including blocks nested in at-rules
//! - **Selectors**: a small selector grammar used to decide whether a block's
//!   prelude is the one a [`SelectorRule`] is looking for
//! - **Declarations**: a line-based parser for flat custom-property declarations
//!
//! ## Quick Start
//!
//! ```rust
//! use cssvars::{SelectorRule, extract_block};
//!
//! let css = r#"
//!     .uk-theme-zinc {
//!         --background: 0 0% 100%;
//!         --foreground: 240 10% 3.9%;
//!     }
//!     .dark.uk-theme-zinc {
//!         --background: 240 10% 3.9%;
//!     }
//! "#;
//!
//! let light = extract_block(css, &SelectorRule::class("uk-theme-zinc"));
//! assert_eq!(light.get("--background"), Some("0 0% 100%"));
//! assert_eq!(light.len(), 2);
//!
//! let dark = extract_block(css, &SelectorRule::class("uk-theme-zinc").qualified_by("dark"));
//! assert_eq!(dark.get("--background"), Some("240 10% 3.9%"));
//! ```
//!
//! ## What is recognized
//!
//! Only declarations of the exact shape `--name: value;` on a single line.
//! Anything else inside a block (regular properties, multi-line values,
//! declarations without a terminating `;`) is skipped without error. A
//! selector that matches no block yields an empty [`VariableSet`].
//!
//! ## Modules
//!
//! - [`parser`]: block scanning, selector parsing and declaration parsing
//! - [`variables`]: [`VariableSet`] and the extraction entry points
//! - [`error`]: error types

pub mod error;
pub mod parser;
pub mod variables;

pub use error::CssVarsError;
pub use parser::SelectorRule;
pub use parser::blocks::{Block, scan_blocks};
pub use variables::{
    VariableSet, class_names_with_prefix, extract_block, extract_block_filtered,
    extract_color_scheme, extract_document,
};
