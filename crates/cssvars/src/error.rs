//! Error types for variable extraction.
//!
//! Extraction itself never fails: unmatched selectors and malformed lines
//! produce empty or partial results. The only error is a selector rule that
//! cannot be parsed in the first place.

use thiserror::Error;

/// Errors raised while preparing an extraction.
///
/// # Examples
///
/// ```rust
/// use cssvars::{CssVarsError, SelectorRule};
///
/// let err = SelectorRule::parse("{ nope").unwrap_err();
/// assert!(matches!(err, CssVarsError::InvalidSelector(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssVarsError {
    /// The selector text handed to [`SelectorRule::parse`](crate::SelectorRule::parse)
    /// is not a single complex selector.
    #[error("invalid selector rule: {0}")]
    InvalidSelector(String),
}
