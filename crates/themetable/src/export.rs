//! CSV export of light/dark tables.
//!
//! One row per variable: `theme,mode,token,value`. Within a theme all light
//! rows come before dark rows.

use crate::error::ThemeError;
use crate::table::{Mode, ModalTheme, ThemeTable};
use log::info;
use std::fs;
use std::io;
use std::path::Path;

pub const HEADER: [&str; 4] = ["theme", "mode", "token", "value"];

/// Writes `table` as CSV to `writer`.
pub fn write_modal_csv_to<W: io::Write>(
    writer: W,
    table: &ThemeTable<ModalTheme>,
) -> Result<(), csv::Error> {
    let mut rows = csv::Writer::from_writer(writer);
    rows.write_record(HEADER)?;
    for (name, theme) in table.iter() {
        for mode in Mode::ALL {
            for (token, value) in theme.get(mode).iter() {
                rows.write_record([name, mode.as_str(), token, value])?;
            }
        }
    }
    rows.flush()?;
    Ok(())
}

/// Writes `table` as CSV to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_modal_csv(path: &Path, table: &ThemeTable<ModalTheme>) -> Result<(), ThemeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ThemeError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = fs::File::create(path).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_modal_csv_to(file, table).map_err(|source| ThemeError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}
