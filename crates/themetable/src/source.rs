//! Loading optional theme files.
//!
//! Some frameworks are optional dependencies and may be partly installed, so
//! a theme file can legitimately be missing. [`load_source`] reports that as
//! [`ThemeSource::Absent`] instead of an error, which keeps "file missing"
//! distinct from "file present with zero variables".

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading one optional theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// The file exists and was read as UTF-8 text.
    Present(String),
    /// No file at the path.
    Absent,
    /// The file exists but could not be used (unreadable or not UTF-8).
    Malformed(String),
}

/// Reads the theme file at `path`.
pub fn load_source(path: &Path) -> ThemeSource {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => ThemeSource::Present(text),
            Err(err) => ThemeSource::Malformed(format!("not valid UTF-8: {err}")),
        },
        Err(err) if err.kind() == ErrorKind::NotFound => ThemeSource::Absent,
        Err(err) => ThemeSource::Malformed(err.to_string()),
    }
}
