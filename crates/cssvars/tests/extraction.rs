//! Integration tests for custom-property extraction.
//!
//! Covers the behaviors theme scraping depends on:
//! - Block-scoped extraction with light/dark selector rules
//! - Filtered extraction for stylesheet defaults
//! - Tolerance for malformed lines, missing blocks and nested rules
//! - Whole-document extraction and color-scheme capture

use cssvars::{
    SelectorRule, VariableSet, class_names_with_prefix, extract_block, extract_block_filtered,
    extract_color_scheme, extract_document,
};

const FRANKEN_SAMPLE: &str = r#"
/* franken-ui */
:root {
  --background: 0 0% 100%;
  --foreground: 240 10% 3.9%;
  --uk-global-font-size: 1rem;
  --primary: 240 5.9% 10%;
  --border: 240 5.9% 90%;
}

.dark {
  --background: 240 10% 3.9%;
  --foreground: 0 0% 98%;
  --uk-breakpoint-s: 640px;
}

.uk-theme-zinc {
  --background: 0 0% 100%;
  --primary: 240 5.9% 10%;
}

.dark.uk-theme-zinc {
  --background: 240 10% 3.9%;
  --primary: 0 0% 98%;
}

.uk-theme-rose{
  --primary: 346.8 77.2% 49.8%;
}
"#;

fn pairs(vars: &VariableSet) -> Vec<(&str, &str)> {
    vars.iter().collect()
}

// ============================================================================
// BLOCK EXTRACTION
// ============================================================================

#[test]
fn test_single_line_block() {
    let vars = extract_block(".sel { --a: 1; --b: 2; }", &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "1"), ("--b", "2")]);
}

#[test]
fn test_light_block() {
    let vars = extract_block(FRANKEN_SAMPLE, &SelectorRule::class("uk-theme-zinc"));
    assert_eq!(
        pairs(&vars),
        vec![("--background", "0 0% 100%"), ("--primary", "240 5.9% 10%")]
    );
}

#[test]
fn test_dark_block() {
    let rule = SelectorRule::class("uk-theme-zinc").qualified_by("dark");
    let vars = extract_block(FRANKEN_SAMPLE, &rule);
    assert_eq!(
        pairs(&vars),
        vec![("--background", "240 10% 3.9%"), ("--primary", "0 0% 98%")]
    );
}

#[test]
fn test_no_whitespace_before_brace() {
    let vars = extract_block(FRANKEN_SAMPLE, &SelectorRule::class("uk-theme-rose"));
    assert_eq!(vars.get("--primary"), Some("346.8 77.2% 49.8%"));
}

#[test]
fn test_missing_block_yields_empty_set() {
    let vars = extract_block(FRANKEN_SAMPLE, &SelectorRule::class("uk-theme-ghost"));
    assert!(vars.is_empty());
}

#[test]
fn test_first_matching_block_wins() {
    let css = ".a { --x: first; }\n.a { --x: second; }";
    let vars = extract_block(css, &SelectorRule::class("a"));
    assert_eq!(vars.get("--x"), Some("first"));
}

#[test]
fn test_selector_list_prelude_matches() {
    let css = ":root, .uk-theme-zinc {\n  --radius: 0.5rem;\n}";
    let vars = extract_block(css, &SelectorRule::class("uk-theme-zinc"));
    assert_eq!(vars.get("--radius"), Some("0.5rem"));
}

#[test]
fn test_block_inside_layer() {
    let css = "@layer base {\n  .uk-theme-zinc {\n    --ring: 240 5.9% 10%;\n  }\n}";
    let vars = extract_block(css, &SelectorRule::class("uk-theme-zinc"));
    assert_eq!(vars.get("--ring"), Some("240 5.9% 10%"));
}

#[test]
fn test_extraction_does_not_change_input() {
    let css = String::from(FRANKEN_SAMPLE);
    let before = css.clone();
    let first = extract_block(&css, &SelectorRule::class("uk-theme-zinc"));
    let second = extract_block(&css, &SelectorRule::class("uk-theme-zinc"));
    assert_eq!(css, before);
    assert_eq!(first, second);
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn test_malformed_line_is_skipped() {
    let css = r#"
        .sel {
            --a: 1;
            --broken without semicolon
            --b: 2;
        }
    "#;
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "1"), ("--b", "2")]);
}

#[test]
fn test_blank_value_is_kept_as_empty_string() {
    let css = ".sel {\n  --tw-pan-x: ;\n  --a: 1;\n}";
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--tw-pan-x", ""), ("--a", "1")]);

    let doc = extract_document("  --tw-ring-inset: ;\n  --b: 2;\n");
    assert_eq!(pairs(&doc), vec![("--tw-ring-inset", ""), ("--b", "2")]);
}

#[test]
fn test_regular_properties_are_ignored() {
    let css = ".sel {\n  color: red;\n  --a: 1;\n  background: var(--a);\n}";
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "1")]);
}

#[test]
fn test_nested_rule_does_not_leak() {
    let css = r#"
        .sel {
            --a: 1;
            .child {
                --a: 99;
                --c: 3;
            }
            --b: 2;
        }
    "#;
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "1"), ("--b", "2")]);
}

#[test]
fn test_comment_with_brace_inside_block() {
    let css = ".sel {\n  /* } */\n  --a: 1;\n}";
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "1")]);
}

#[test]
fn test_comment_inside_prelude() {
    let css = r#"
        .uk-theme-zinc /* light */ {
            --a: 1;
        }
        .dark/* night */.uk-theme-zinc {
            --a: 2;
        }
    "#;
    let light = extract_block(css, &SelectorRule::class("uk-theme-zinc"));
    assert_eq!(pairs(&light), vec![("--a", "1")]);

    let dark = extract_block(css, &SelectorRule::class("uk-theme-zinc").qualified_by("dark"));
    assert_eq!(pairs(&dark), vec![("--a", "2")]);
}

#[test]
fn test_duplicate_name_keeps_position_takes_last_value() {
    let css = ".sel {\n  --a: 1;\n  --b: 2;\n  --a: 3;\n}";
    let vars = extract_block(css, &SelectorRule::class("sel"));
    assert_eq!(pairs(&vars), vec![("--a", "3"), ("--b", "2")]);
}

// ============================================================================
// FILTERED EXTRACTION
// ============================================================================

#[test]
fn test_root_filter_keeps_whitelisted_names() {
    let css = ":root { --background: oklch(1 0 0); --foo: bar; }";
    let vars = extract_block_filtered(css, &SelectorRule::root(), &["background"]);
    assert_eq!(pairs(&vars), vec![("--background", "oklch(1 0 0)")]);
}

#[test]
fn test_root_and_dark_defaults() {
    let allowed = ["--background", "--foreground", "--primary", "--border"];

    let light = extract_block_filtered(FRANKEN_SAMPLE, &SelectorRule::root(), &allowed);
    assert_eq!(
        light.names().collect::<Vec<_>>(),
        vec!["--background", "--foreground", "--primary", "--border"]
    );

    let dark = extract_block_filtered(FRANKEN_SAMPLE, &SelectorRule::class("dark"), &allowed);
    assert_eq!(
        dark.names().collect::<Vec<_>>(),
        vec!["--background", "--foreground"]
    );
}

// ============================================================================
// DOCUMENT EXTRACTION
// ============================================================================

const DAISY_SAMPLE: &str = r#"[data-theme="dracula"] {
  color-scheme: dark;
  --color-base-100: oklch(28.822% 0.022 277.508);
  --color-primary: oklch(75.461% 0.183 346.812);
  --radius-box: 0.5rem;
}
"#;

#[test]
fn test_document_extraction() {
    let vars = extract_document(DAISY_SAMPLE);
    assert_eq!(vars.len(), 3);
    assert_eq!(vars.get("--radius-box"), Some("0.5rem"));
    assert!(!vars.contains("color-scheme"));
}

#[test]
fn test_color_scheme() {
    assert_eq!(extract_color_scheme(DAISY_SAMPLE), Some("dark".to_string()));
    assert_eq!(extract_color_scheme(".a { --x: 1; }"), None);
}

// ============================================================================
// DISCOVERY
// ============================================================================

#[test]
fn test_discover_theme_names() {
    assert_eq!(
        class_names_with_prefix(FRANKEN_SAMPLE, "uk-theme-"),
        vec!["zinc", "rose"]
    );
}

#[test]
fn test_variable_set_serializes_in_order() {
    let vars = extract_block(".sel { --z: 1; --a: 2; }", &SelectorRule::class("sel"));
    let json = serde_json::to_string(&vars).unwrap();
    assert_eq!(json, r#"{"--z":"1","--a":"2"}"#);
}
