//! Static Tailwind design tokens.
//!
//! Tailwind's tokens are not scraped: the values below are the v4 defaults
//! for a subset of color families plus spacing, typography, radii and
//! shadows. Colors are OKLCH.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tailwind token table, serialized with Tailwind's own key names
/// (`fontFamily`, `borderRadius`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindTokens {
    /// Color family → shade → value.
    pub colors: IndexMap<String, IndexMap<String, String>>,
    pub spacing: Spacing,
    pub typography: Typography,
    pub border_radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Size of one spacing step.
    pub base: String,
    /// Step multipliers available as utilities (`p-4`, `m-0.5`, ...).
    pub scale: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
}

const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const COLORS: &[(&str, [&str; 11])] = &[
    (
        "slate",
        [
            "oklch(98.4% 0.003 247.858)",
            "oklch(96.8% 0.007 247.896)",
            "oklch(92.9% 0.013 255.508)",
            "oklch(86.9% 0.022 252.894)",
            "oklch(70.4% 0.04 256.788)",
            "oklch(55.4% 0.046 257.417)",
            "oklch(44.6% 0.043 257.281)",
            "oklch(37.2% 0.044 257.287)",
            "oklch(27.9% 0.041 260.031)",
            "oklch(20.8% 0.042 265.755)",
            "oklch(12.9% 0.042 264.695)",
        ],
    ),
    (
        "gray",
        [
            "oklch(98.5% 0.002 247.839)",
            "oklch(96.7% 0.003 264.542)",
            "oklch(92.8% 0.006 264.531)",
            "oklch(87.2% 0.01 258.338)",
            "oklch(70.7% 0.022 261.325)",
            "oklch(55.1% 0.027 264.364)",
            "oklch(44.6% 0.03 256.802)",
            "oklch(37.3% 0.034 259.733)",
            "oklch(27.8% 0.033 256.848)",
            "oklch(21% 0.034 264.665)",
            "oklch(13% 0.028 261.692)",
        ],
    ),
    (
        "zinc",
        [
            "oklch(98.5% 0 0)",
            "oklch(96.7% 0.001 286.375)",
            "oklch(92% 0.004 286.32)",
            "oklch(87.1% 0.006 286.286)",
            "oklch(70.5% 0.015 286.067)",
            "oklch(55.2% 0.016 285.938)",
            "oklch(44.2% 0.017 285.786)",
            "oklch(37% 0.013 285.805)",
            "oklch(27.4% 0.006 286.033)",
            "oklch(21% 0.006 285.885)",
            "oklch(14.1% 0.005 285.823)",
        ],
    ),
    (
        "blue",
        [
            "oklch(97% 0.014 254.604)",
            "oklch(93.2% 0.032 255.585)",
            "oklch(88.2% 0.059 254.128)",
            "oklch(80.9% 0.105 251.813)",
            "oklch(70.7% 0.165 254.624)",
            "oklch(62.3% 0.214 259.815)",
            "oklch(54.6% 0.245 262.881)",
            "oklch(48.8% 0.243 264.376)",
            "oklch(42.4% 0.199 265.638)",
            "oklch(37.9% 0.146 265.522)",
            "oklch(28.2% 0.091 267.935)",
        ],
    ),
    (
        "red",
        [
            "oklch(97.1% 0.013 17.38)",
            "oklch(93.6% 0.032 17.717)",
            "oklch(88.5% 0.062 18.334)",
            "oklch(80.8% 0.114 19.571)",
            "oklch(70.4% 0.191 22.216)",
            "oklch(63.7% 0.237 25.331)",
            "oklch(57.7% 0.245 27.325)",
            "oklch(50.5% 0.213 27.518)",
            "oklch(44.4% 0.177 26.899)",
            "oklch(39.6% 0.141 25.723)",
            "oklch(25.8% 0.092 26.042)",
        ],
    ),
    (
        "green",
        [
            "oklch(98.2% 0.018 155.826)",
            "oklch(96.2% 0.044 156.743)",
            "oklch(92.5% 0.084 155.995)",
            "oklch(87.1% 0.15 154.449)",
            "oklch(79.2% 0.209 151.711)",
            "oklch(72.3% 0.219 149.579)",
            "oklch(62.7% 0.194 149.214)",
            "oklch(52.7% 0.154 150.069)",
            "oklch(44.8% 0.119 151.328)",
            "oklch(39.3% 0.095 152.535)",
            "oklch(26.6% 0.065 152.934)",
        ],
    ),
];

const SPACING_BASE: &str = "0.25rem";

const SPACING_SCALE: &[&str] = &[
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

const FONT_FAMILY: &[(&str, &str)] = &[
    ("sans", "ui-sans-serif, system-ui, sans-serif"),
    ("serif", "ui-serif, Georgia, Cambria, Times, serif"),
    (
        "mono",
        "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace",
    ),
];

const FONT_SIZE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("xs", "0.125rem"),
    ("sm", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("4xl", "2rem"),
];

const SHADOWS: &[(&str, &str)] = &[
    ("2xs", "0 1px rgb(0 0 0 / 0.05)"),
    ("xs", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "sm",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
];

static TAILWIND: Lazy<TailwindTokens> = Lazy::new(|| TailwindTokens {
    colors: COLORS
        .iter()
        .map(|(family, values)| {
            let scale: IndexMap<String, String> = SHADES
                .iter()
                .zip(values)
                .map(|(shade, value)| (shade.to_string(), value.to_string()))
                .collect();
            (family.to_string(), scale)
        })
        .collect(),
    spacing: Spacing {
        base: SPACING_BASE.to_string(),
        scale: SPACING_SCALE.iter().map(|step| step.to_string()).collect(),
    },
    typography: Typography {
        font_family: to_map(FONT_FAMILY),
        font_size: to_map(FONT_SIZE),
    },
    border_radius: to_map(BORDER_RADIUS),
    shadows: to_map(SHADOWS),
});

fn to_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// The Tailwind token table, built on first use.
pub fn tailwind_tokens() -> &'static TailwindTokens {
    &TAILWIND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_all_shades() {
        let tokens = tailwind_tokens();
        assert_eq!(
            tokens.colors.keys().collect::<Vec<_>>(),
            vec!["slate", "gray", "zinc", "blue", "red", "green"]
        );
        for scale in tokens.colors.values() {
            assert_eq!(scale.keys().collect::<Vec<_>>(), SHADES.to_vec());
        }
        assert_eq!(tokens.colors["zinc"]["50"], "oklch(98.5% 0 0)");
    }

    #[test]
    fn test_spacing_scale() {
        let spacing = &tailwind_tokens().spacing;
        assert_eq!(spacing.base, "0.25rem");
        assert_eq!(spacing.scale.len(), 34);
        assert_eq!(spacing.scale.first().map(String::as_str), Some("0"));
        assert_eq!(spacing.scale.last().map(String::as_str), Some("96"));
    }

    #[test]
    fn test_serialized_key_names() {
        let value = serde_json::to_value(tailwind_tokens()).unwrap();
        assert!(value.get("borderRadius").is_some());
        assert_eq!(value["typography"]["fontSize"]["9xl"], "8rem");
        let mono = value["typography"]["fontFamily"]["mono"].as_str().unwrap();
        assert_eq!(mono.split(", ").count(), 6);
        assert_eq!(value["shadows"]["2xs"], "0 1px rgb(0 0 0 / 0.05)");
    }
}
