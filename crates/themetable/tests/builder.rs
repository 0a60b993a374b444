//! Integration tests for theme table builders.

use cssvars::VariableSet;
use std::fs;
use std::path::Path;
use themetable::{FlatTableBuilder, ModalTableBuilder, SkipReason, ThemeSource};

const FRANKEN_CSS: &str = r#"
:root {
  --background: 0 0% 100%;
  --foreground: 240 10% 3.9%;
  --uk-global-font-size: 1rem;
}
.dark {
  --background: 240 10% 3.9%;
  --uk-breakpoint-s: 640px;
}
.uk-theme-zinc {
  --primary: 240 5.9% 10%;
}
.dark.uk-theme-zinc {
  --primary: 0 0% 98%;
}
.uk-theme-slate {
  --primary: 222.2 47.4% 11.2%;
}
"#;

// ============================================================================
// MODAL TABLES
// ============================================================================

#[test]
fn test_modal_table_keeps_catalog_order_and_empty_themes() {
    let table = ModalTableBuilder::new(FRANKEN_CSS).build(&["slate", "ghost", "zinc"]);

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["slate", "ghost", "zinc"]);

    let ghost = table.get("ghost").unwrap();
    assert!(ghost.light.is_empty());
    assert!(ghost.dark.is_empty());

    let slate = table.get("slate").unwrap();
    assert_eq!(slate.light.get("--primary"), Some("222.2 47.4% 11.2%"));
    assert!(slate.dark.is_empty());

    let zinc = table.get("zinc").unwrap();
    assert_eq!(zinc.light.get("--primary"), Some("240 5.9% 10%"));
    assert_eq!(zinc.dark.get("--primary"), Some("0 0% 98%"));
}

#[test]
fn test_root_theme_is_appended_and_filtered() {
    let table = ModalTableBuilder::new(FRANKEN_CSS)
        .with_root_theme("default", ["--background", "--foreground"])
        .build(&["zinc"]);

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["zinc", "default"]);
    let default = table.get("default").unwrap();
    assert_eq!(
        default.light.names().collect::<Vec<_>>(),
        vec!["--background", "--foreground"]
    );
    assert_eq!(default.dark.names().collect::<Vec<_>>(), vec!["--background"]);
}

#[test]
fn test_custom_prefix_and_dark_class() {
    let css = ".theme-ocean { --a: 1; }\n.night.theme-ocean { --a: 2; }";
    let table = ModalTableBuilder::new(css)
        .with_class_prefix("theme-")
        .with_dark_class("night")
        .build(&["ocean"]);
    let ocean = table.get("ocean").unwrap();
    assert_eq!(ocean.light.get("--a"), Some("1"));
    assert_eq!(ocean.dark.get("--a"), Some("2"));
}

#[test]
fn test_discover_uses_stylesheet_order() {
    let table = ModalTableBuilder::new(FRANKEN_CSS).discover();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["zinc", "slate"]);
}

// ============================================================================
// FLAT TABLES
// ============================================================================

fn write_theme(dir: &Path, name: &str, css: &str) {
    fs::write(dir.join(format!("{name}.css")), css).unwrap();
}

fn template(dir: &Path) -> String {
    format!("{}/{{name}}.css", dir.display())
}

#[test]
fn test_flat_table_skips_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    write_theme(dir.path(), "zinc", "[data-theme=zinc] {\n  --color-primary: red;\n}\n");

    let build = FlatTableBuilder::new(template(dir.path())).build(&["zinc", "ghost"]);

    assert_eq!(build.table.names().collect::<Vec<_>>(), vec!["zinc"]);
    assert_eq!(build.skipped.len(), 1);
    assert_eq!(build.skipped[0].name, "ghost");
    assert_eq!(build.skipped[0].reason, SkipReason::Absent);
}

#[test]
fn test_flat_table_keeps_present_file_without_variables() {
    let dir = tempfile::tempdir().unwrap();
    write_theme(dir.path(), "empty", "/* nothing here */\n");

    let build = FlatTableBuilder::new(template(dir.path())).build(&["empty"]);

    assert!(build.table.get("empty").unwrap().is_empty());
    assert!(build.skipped.is_empty());
}

#[test]
fn test_flat_table_color_scheme() {
    let dir = tempfile::tempdir().unwrap();
    write_theme(
        dir.path(),
        "dracula",
        "[data-theme=dracula] {\n  color-scheme: dark;\n  --color-base-100: oklch(28.822% 0.022 277.508);\n}\n",
    );

    let builder = FlatTableBuilder::new(template(dir.path()));
    let plain = builder.build(&["dracula"]);
    assert!(!plain.table.get("dracula").unwrap().contains("color-scheme"));

    let with_scheme = builder.clone().with_color_scheme(true).build(&["dracula"]);
    let dracula = with_scheme.table.get("dracula").unwrap();
    assert_eq!(
        dracula.names().collect::<Vec<_>>(),
        vec!["--color-base-100", "color-scheme"]
    );
    assert_eq!(dracula.get("color-scheme"), Some("dark"));
}

#[test]
fn test_malformed_theme_does_not_stop_the_build() {
    let builder = FlatTableBuilder::new("themes/{name}.css");
    let build = builder.build_with(&["bad", "good"], |path| {
        if path.ends_with("bad.css") {
            ThemeSource::Malformed("permission denied".into())
        } else {
            ThemeSource::Present("--a: 1;\n".into())
        }
    });

    assert_eq!(build.table.names().collect::<Vec<_>>(), vec!["good"]);
    assert_eq!(
        build.table.get("good"),
        Some(&VariableSet::from_iter([("--a", "1")]))
    );
    assert_eq!(
        build.skipped[0].reason,
        SkipReason::Malformed("permission denied".into())
    );
}

#[test]
fn test_path_template() {
    let builder = FlatTableBuilder::new("vite/node_modules/daisyui/theme/{name}.css");
    assert_eq!(
        builder.path_for("nord"),
        Path::new("vite/node_modules/daisyui/theme/nord.css")
    );
}
