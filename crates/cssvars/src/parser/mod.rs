//! Parsing for theme extraction.
//!
//! - [`blocks`]: bracket-depth scanning of `{ ... }` blocks
//! - [`selectors`]: selector grammar used to match block preludes
//! - [`SelectorRule`]: the selector a caller is looking for
//! - [`parse_declarations`]: custom-property declarations inside a body
//!
//! ## Example
//!
//! ```rust
//! use cssvars::parser::{parse_declarations, SelectorRule};
//!
//! let rule = SelectorRule::parse(".uk-theme-zinc").unwrap();
//! assert!(rule.matches(":root, .uk-theme-zinc"));
//!
//! let decls = parse_declarations("  --a: 1; --b: 2;\n  color: red;\n");
//! assert_eq!(decls, vec![("--a", "1"), ("--b", "2")]);
//! ```

pub mod blocks;
pub mod selectors;

pub use crate::parser::selectors::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SelectorList, SelectorPart,
};

use crate::CssVarsError;
use crate::parser::selectors::{parse_complex_selector, parse_prelude};

use nom::{
    IResult,
    bytes::complete::{tag, take_till1, take_while1},
    character::complete::{char, multispace0, space0},
    combinator::recognize,
    sequence::{pair, terminated},
};
use std::fmt;

/// The selector that introduces the block a caller wants variables from.
///
/// A rule matches a block when any selector in the block's comma-separated
/// prelude is structurally equal to it. Whitespace and the order of simple
/// selectors inside a compound are ignored, so `.dark.uk-theme-zinc {` and
/// `.uk-theme-zinc.dark{` both match the same rule.
#[derive(Clone, Debug)]
pub struct SelectorRule {
    selector: ComplexSelector,
}

impl SelectorRule {
    /// Parses a single complex selector such as `.dark.uk-theme-zinc`.
    pub fn parse(text: &str) -> Result<Self, CssVarsError> {
        let trimmed = text.trim();
        match parse_complex_selector(trimmed) {
            Ok((rest, selector)) if rest.trim().is_empty() => Ok(Self { selector }),
            _ => Err(CssVarsError::InvalidSelector(text.to_string())),
        }
    }

    /// A rule for the single class selector `.name`.
    pub fn class(name: &str) -> Self {
        Self::from_compound(vec![Selector::Class(name.to_string())])
    }

    /// A rule for `:root`.
    pub fn root() -> Self {
        Self::from_compound(vec![Selector::PseudoClass("root".to_string())])
    }

    /// Adds a qualifying class to the rule's subject.
    ///
    /// `SelectorRule::class("uk-theme-zinc").qualified_by("dark")` matches
    /// `.dark.uk-theme-zinc`, the dark variant of a themed block.
    pub fn qualified_by(mut self, class: &str) -> Self {
        if let Some(subject) = self.selector.subject_mut() {
            subject.selectors.insert(0, Selector::Class(class.to_string()));
        }
        self
    }

    /// Returns true if any selector in `prelude` is this rule's selector.
    pub fn matches(&self, prelude: &str) -> bool {
        parse_prelude(prelude).is_some_and(|list| {
            list.selectors
                .iter()
                .any(|candidate| candidate.same_as(&self.selector))
        })
    }

    fn from_compound(selectors: Vec<Selector>) -> Self {
        Self {
            selector: ComplexSelector::new(vec![SelectorPart::new(
                CompoundSelector::new(selectors),
                Combinator::None,
            )]),
        }
    }
}

impl fmt::Display for SelectorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.selector.parts {
            for simple in &part.compound.selectors {
                match simple {
                    Selector::Type(name) => write!(f, "{name}")?,
                    Selector::Class(name) => write!(f, ".{name}")?,
                    Selector::Id(name) => write!(f, "#{name}")?,
                    Selector::Universal => write!(f, "*")?,
                    Selector::PseudoClass(name) => write!(f, ":{name}")?,
                    Selector::Parent => write!(f, "&")?,
                    Selector::Attribute(name, value) if value.is_empty() => {
                        write!(f, "[{name}]")?
                    }
                    Selector::Attribute(name, value) => write!(f, "[{name}=\"{value}\"]")?,
                }
            }
            match part.combinator {
                Combinator::None => {}
                Combinator::Descendant => write!(f, " ")?,
                Combinator::Child => write!(f, " > ")?,
                Combinator::AdjacentSibling => write!(f, " + ")?,
                Combinator::GeneralSibling => write!(f, " ~ ")?,
            }
        }
        Ok(())
    }
}

/// Parses `--name`.
pub fn parse_custom_property_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        tag("--"),
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
    ))(input)
}

/// Parses one `--name: value;` declaration, leading whitespace allowed.
///
/// The value runs to the first `;` and is returned trimmed. A declaration
/// without a terminating `;` is an error.
pub fn parse_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_custom_property_name(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char(':')(input)?;
    let (input, value) =
        terminated(take_till1(|c: char| c == ';' || c == '\n'), char(';'))(input)?;
    Ok((input, (name, value.trim())))
}

/// Collects the custom-property declarations in `body`, line by line.
///
/// Each line is read from the left: declarations are taken while they parse,
/// and the rest of the line is ignored at the first thing that is not one.
/// Lines that do not start with a declaration contribute nothing. A value
/// of only whitespace (`--tw-pan-x: ;`) is kept as `""`; `--a:;` is not a
/// declaration.
pub fn parse_declarations(body: &str) -> Vec<(&str, &str)> {
    let mut declarations = Vec::new();
    for line in body.lines() {
        let mut rest = line;
        while let Ok((remaining, declaration)) = parse_declaration(rest) {
            declarations.push(declaration);
            rest = remaining;
        }
    }
    declarations
}
