//! Selector parsing.
//!
//! A small selector grammar: enough to read the selector lists
//! that head theme blocks in framework stylesheets (`:root`, `.dark`,
//! `.dark.uk-theme-zinc`, `[data-theme="light"]`, `:root:has(...)`) and to
//! compare them with a [`SelectorRule`](super::SelectorRule).

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize, value},
    multi::{many0, many1},
    sequence::{delimited, pair, preceded, tuple},
};

use super::blocks::strip_comments;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    /// Pseudo-class or pseudo-element, arguments included verbatim
    /// (`root`, `has(input:checked)`, `:before`).
    PseudoClass(String),
    Parent,
    /// Attribute selector with surrounding quotes removed from the value.
    Attribute(String, String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Compares two compounds ignoring the order of their simple selectors.
    ///
    /// `.dark.uk-theme-zinc` and `.uk-theme-zinc.dark` select the same elements.
    pub fn same_as(&self, other: &CompoundSelector) -> bool {
        if self.selectors.len() != other.selectors.len() {
            return false;
        }
        let mut left = self.selectors.clone();
        let mut right = other.selectors.clone();
        left.sort();
        right.sort();
        left == right
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

impl SelectorPart {
    pub fn new(compound: CompoundSelector, combinator: Combinator) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn new(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }

    /// Structural equality with compound order ignored.
    pub fn same_as(&self, other: &ComplexSelector) -> bool {
        self.parts.len() == other.parts.len()
            && self.parts.iter().zip(&other.parts).all(|(a, b)| {
                a.combinator == b.combinator && a.compound.same_as(&b.compound)
            })
    }

    /// The rightmost compound, i.e. the element the rule applies to.
    pub fn subject_mut(&mut self) -> Option<&mut CompoundSelector> {
        self.parts.last_mut().map(|part| &mut part.compound)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn new(selectors: Vec<ComplexSelector>) -> Self {
        Self { selectors }
    }
}

/// Identifier characters, with backslash escapes (`sm\:flex`) kept as-is.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
        recognize(pair(char('\\'), nom::character::complete::anychar)),
    ))))(input)
}

/// Parses a simple selector: Type, .Class, #ID, :pseudo, [attr], & or *.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Selector::Class(s.to_string())
        }),
        map(preceded(char(':'), parse_pseudo), |s| {
            Selector::PseudoClass(s.to_string())
        }),
        map(char('&'), |_| Selector::Parent),
        map(char('*'), |_| Selector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| Selector::Type(s.to_string())),
    ))(input)
}

/// Parses a compound selector (e.g., ".dark.uk-theme-zinc").
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, CompoundSelector::new(selectors)))
}

/// Parses the combinator between two compounds, with its surrounding
/// whitespace. Whitespace alone is a descendant combinator.
fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    let (after_ws, ws) = multispace0(input)?;
    let explicit: IResult<&str, Combinator> = alt((
        value(Combinator::Child, char('>')),
        value(Combinator::AdjacentSibling, char('+')),
        value(Combinator::GeneralSibling, char('~')),
    ))(after_ws);

    match explicit {
        Ok((rest, combinator)) => {
            let (rest, _) = multispace0(rest)?;
            Ok((rest, combinator))
        }
        Err(_) if !ws.is_empty() => Ok((after_ws, Combinator::Descendant)),
        Err(err) => Err(err),
    }
}

/// Parses a complex selector with combinators (e.g., ".dark > .card").
///
/// Whitespace that is not followed by another compound ends the selector and
/// is left in the input. A `>`, `+` or `~` with nothing after it is an error.
pub fn parse_complex_selector(input: &str) -> IResult<&str, ComplexSelector> {
    let (mut input, mut subject) = parse_compound_selector(input)?;
    let mut parts = Vec::new();

    while let Ok((after, combinator)) = parse_combinator(input) {
        match parse_compound_selector(after) {
            Ok((rest, next)) => {
                parts.push(SelectorPart::new(subject, combinator));
                subject = next;
                input = rest;
            }
            Err(err) if combinator != Combinator::Descendant => return Err(err),
            Err(_) => break,
        }
    }

    parts.push(SelectorPart::new(subject, Combinator::None));
    Ok((input, ComplexSelector::new(parts)))
}

/// Parses a comma-separated list of selectors (e.g., ":root, .light").
pub fn parse_selector_list(input: &str) -> IResult<&str, SelectorList> {
    let (input, _) = multispace0(input)?;
    let (input, first) = parse_complex_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_complex_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, SelectorList::new(selectors)))
}

/// Parses a whole prelude as a selector list, rejecting trailing input.
///
/// Comments anywhere in the prelude are ignored.
pub fn parse_prelude(prelude: &str) -> Option<SelectorList> {
    let prelude = strip_comments(prelude);
    match parse_selector_list(&prelude) {
        Ok((rest, list)) if rest.trim().is_empty() => Some(list),
        _ => None,
    }
}

/// Pseudo name after the first colon: `root`, `:before`, `has(...)`.
fn parse_pseudo(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(char(':')),
        parse_ident,
        opt(parse_balanced_parens),
    )))(input)
}

fn parse_balanced_parens(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('(') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..i + 1]));
                }
            }
            _ => {}
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Eof,
    )))
}

fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    if let Some(idx) = content.find('=') {
        let name = content[..idx].trim();
        let value = content[idx + 1..].trim().trim_matches(|c: char| c == '"' || c == '\'');
        Ok((
            input,
            Selector::Attribute(name.to_string(), value.to_string()),
        ))
    } else {
        Ok((
            input,
            Selector::Attribute(content.trim().to_string(), "".to_string()),
        ))
    }
}
