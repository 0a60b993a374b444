//! Custom-property extraction.
//!
//! The entry points here combine block scanning, selector matching and
//! declaration parsing:
//!
//! - [`extract_block`]: variables from the first block a rule matches
//! - [`extract_block_filtered`]: the same, restricted to allowed names
//! - [`extract_document`]: variables from every line of a stylesheet
//! - [`extract_color_scheme`]: the first `color-scheme` keyword
//! - [`class_names_with_prefix`]: theme discovery by class prefix
//!
//! None of them fail. A selector that matches nothing produces an empty
//! [`VariableSet`], which callers report as a theme with zero variables.

use crate::parser::blocks::scan_blocks;
use crate::parser::selectors::{Selector, parse_prelude};
use crate::parser::{SelectorRule, parse_declarations};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// An ordered mapping of custom-property names to their raw values.
///
/// Order follows first appearance in the source. Declaring a name twice
/// keeps its first position and the last value, like a cascade within a
/// single block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSet {
    variables: IndexMap<String, String>,
}

impl VariableSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `name`, replacing any earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = VariableSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Extracts the variables declared directly in the first block whose
/// prelude matches `rule`.
///
/// Declarations inside blocks nested in the matched block are not included.
///
/// ```rust
/// use cssvars::{SelectorRule, extract_block};
///
/// let vars = extract_block(".sel { --a: 1; --b: 2; }", &SelectorRule::class("sel"));
/// assert_eq!(vars.get("--a"), Some("1"));
/// assert_eq!(vars.get("--b"), Some("2"));
/// ```
pub fn extract_block(css: &str, rule: &SelectorRule) -> VariableSet {
    extract_matching(css, rule, |_| true)
}

/// Like [`extract_block`], keeping only names that contain one of `allowed`.
///
/// Used for stylesheet-wide defaults (`:root`, `.dark`) where the block also
/// carries framework internals that are not theme colors.
///
/// ```rust
/// use cssvars::{SelectorRule, extract_block_filtered};
///
/// let css = ":root { --background: oklch(1 0 0); --foo: bar; }";
/// let vars = extract_block_filtered(css, &SelectorRule::root(), &["background"]);
/// assert_eq!(vars.len(), 1);
/// assert_eq!(vars.get("--background"), Some("oklch(1 0 0)"));
/// ```
pub fn extract_block_filtered<S: AsRef<str>>(
    css: &str,
    rule: &SelectorRule,
    allowed: &[S],
) -> VariableSet {
    extract_matching(css, rule, |name| {
        allowed
            .iter()
            .any(|fragment| name.contains(fragment.as_ref()))
    })
}

fn extract_matching(css: &str, rule: &SelectorRule, keep: impl Fn(&str) -> bool) -> VariableSet {
    let Some(block) = scan_blocks(css)
        .into_iter()
        .find(|block| rule.matches(block.prelude))
    else {
        debug!("no block matches `{rule}`");
        return VariableSet::new();
    };

    let body = block.top_level_body();
    let vars: VariableSet = parse_declarations(&body)
        .into_iter()
        .filter(|(name, _)| keep(name))
        .collect();
    debug!("`{rule}`: {} variables", vars.len());
    vars
}

/// Extracts every custom-property declaration in `css`, block structure
/// ignored.
///
/// Suited to single-theme files where the whole file is the theme.
pub fn extract_document(css: &str) -> VariableSet {
    parse_declarations(css).into_iter().collect()
}

/// Returns the keyword of the first `color-scheme: <word>;` declaration.
pub fn extract_color_scheme(css: &str) -> Option<String> {
    let mut rest = css;
    while let Some(idx) = rest.find("color-scheme:") {
        let after = &rest[idx + "color-scheme:".len()..];
        let value = after.trim_start();
        let word_len = value
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(value.len());
        if word_len > 0 && value[word_len..].starts_with(';') {
            return Some(value[..word_len].to_string());
        }
        rest = after;
    }
    None
}

/// Names `<name>` of every `.<prefix><name>` class that heads a block.
///
/// Names appear once each, in order of first appearance. Qualified variants
/// (`.dark.uk-theme-zinc`) count towards the same name.
///
/// ```rust
/// use cssvars::class_names_with_prefix;
///
/// let css = ".uk-theme-zinc { } .dark.uk-theme-zinc { } .uk-theme-rose { }";
/// assert_eq!(class_names_with_prefix(css, "uk-theme-"), vec!["zinc", "rose"]);
/// ```
pub fn class_names_with_prefix(css: &str, prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for block in scan_blocks(css) {
        let Some(list) = parse_prelude(block.prelude) else {
            continue;
        };
        let classes = list
            .selectors
            .iter()
            .flat_map(|complex| &complex.parts)
            .flat_map(|part| &part.compound.selectors);
        for selector in classes {
            if let Selector::Class(class) = selector {
                if let Some(name) = class.strip_prefix(prefix) {
                    if !name.is_empty() && !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
    }
    names
}
