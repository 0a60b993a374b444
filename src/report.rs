//! Summary lines printed by the binaries.

use cssvars::VariableSet;
use std::io::{self, Write};
use std::path::Path;
use themetable::{CombinedDocument, ModalTheme, ThemeTable};

pub fn modal_summary<W: Write>(out: &mut W, table: &ThemeTable<ModalTheme>) -> io::Result<()> {
    writeln!(out, "Extracted {} FrankenUI themes", table.len())?;
    for (name, theme) in table.iter() {
        writeln!(
            out,
            "  {name}: {} light variables, {} dark variables",
            theme.light.len(),
            theme.dark.len()
        )?;
    }
    Ok(())
}

pub fn flat_summary<W: Write>(out: &mut W, table: &ThemeTable<VariableSet>) -> io::Result<()> {
    writeln!(out, "Extracted {} DaisyUI themes", table.len())?;
    for (name, vars) in table.iter() {
        writeln!(out, "  {name}: {} variables", vars.len())?;
    }
    Ok(())
}

pub fn combined_summary<W: Write>(
    out: &mut W,
    path: &Path,
    document: &CombinedDocument,
) -> io::Result<()> {
    writeln!(out, "Combined theme extraction saved to {}", path.display())?;
    writeln!(out, "- FrankenUI: {} themes", document.metadata.frankenui_theme_count)?;
    writeln!(out, "- DaisyUI: {} themes", document.metadata.daisyui_theme_count)?;
    writeln!(out, "- Tailwind: Design tokens and color scales")?;
    Ok(())
}
