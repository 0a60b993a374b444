//! Bracket-depth block scanning.
//!
//! [`scan_blocks`] walks a stylesheet once and reports every `{ ... }` block
//! it finds, in order of the opening brace. Comments and quoted strings are
//! skipped so that braces inside them never open or close a block. Blocks
//! nested in at-rules (`@layer base { :root { ... } }`) are reported too,
//! with their depth.

use std::borrow::Cow;

/// A single `{ ... }` block located in a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the previous statement boundary and the opening brace,
    /// trimmed. For a style rule this is the selector list. Comments inside
    /// it are kept; selector matching ignores them.
    pub prelude: &'a str,
    /// Text strictly between the opening brace and its matching closing brace.
    pub body: &'a str,
    /// Nesting depth of the block itself. Top-level rules have depth 0.
    pub depth: usize,
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset just past the closing brace (or end of input if the block
    /// is never closed).
    pub end: usize,
}

impl<'a> Block<'a> {
    /// Returns the body with every nested block removed.
    ///
    /// Each nested block (including its prelude) is replaced by a newline so
    /// the surrounding lines keep their boundaries.
    pub fn top_level_body(&self) -> String {
        let mut out = String::with_capacity(self.body.len());
        let mut depth = 0usize;
        let mut segment_start = 0usize;
        let mut scanner = Scanner::new(self.body);

        while let Some((idx, c)) = scanner.next_significant() {
            match c {
                '{' => {
                    if depth == 0 {
                        // Drop the nested rule's prelude along with its body.
                        let segment = &self.body[segment_start..idx];
                        let keep = segment
                            .rfind([';', '\n'])
                            .map(|pos| pos + 1)
                            .unwrap_or(0);
                        out.push_str(&segment[..keep]);
                        out.push('\n');
                    }
                    depth += 1;
                }
                '}' => {
                    if depth > 0 {
                        depth -= 1;
                        if depth == 0 {
                            segment_start = idx + 1;
                        }
                    }
                }
                _ => {}
            }
        }

        if depth == 0 {
            out.push_str(&self.body[segment_start..]);
        }
        out
    }
}

/// Scans `css` and returns every block in order of its opening brace.
///
/// A block that is never closed extends to the end of the input. Stray
/// closing braces are ignored.
pub fn scan_blocks(css: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    // Indices into `blocks` for blocks still waiting for their closing brace.
    let mut open: Vec<usize> = Vec::new();
    let mut prelude_start = 0usize;
    let mut scanner = Scanner::new(css);

    while let Some((idx, c)) = scanner.next_significant() {
        match c {
            '{' => {
                let prelude = strip_comments_trim(&css[prelude_start..idx]);
                blocks.push(Block {
                    prelude,
                    body: "",
                    depth: open.len(),
                    start: idx,
                    end: css.len(),
                });
                open.push(blocks.len() - 1);
                prelude_start = idx + 1;
            }
            '}' => {
                if let Some(block_idx) = open.pop() {
                    let block = &mut blocks[block_idx];
                    block.body = &css[block.start + 1..idx];
                    block.end = idx + 1;
                }
                prelude_start = idx + 1;
            }
            ';' => prelude_start = idx + 1,
            _ => {}
        }
    }

    for block_idx in open {
        let block = &mut blocks[block_idx];
        block.body = &css[block.start + 1..];
    }

    blocks
}

/// Removes every `/* ... */` comment from `text`, leaving quoted strings
/// untouched. Comments are dropped without a trace, so `.a/**/.b` stays one
/// compound selector.
pub(crate) fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains("/*") {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                out.push(c);
            }
            None if c == '/' && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Trims a prelude, dropping a leading comment such as a file banner.
fn strip_comments_trim(prelude: &str) -> &str {
    let mut rest = prelude.trim();
    while let Some(after_open) = rest.strip_prefix("/*") {
        match after_open.find("*/") {
            Some(close) => rest = after_open[close + 2..].trim_start(),
            None => return "",
        }
    }
    rest.trim()
}

/// Character walker that hides comments and string contents.
struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    /// Next character outside of a comment or quoted string.
    fn next_significant(&mut self) -> Option<(usize, char)> {
        while let Some((idx, c)) = self.chars.next() {
            match c {
                '/' if matches!(self.chars.peek(), Some((_, '*'))) => {
                    self.chars.next();
                    self.skip_comment();
                }
                '"' | '\'' => self.skip_string(c),
                '\\' => {
                    self.chars.next();
                }
                _ => return Some((idx, c)),
            }
        }
        None
    }

    fn skip_comment(&mut self) {
        while let Some((_, c)) = self.chars.next() {
            if c == '*' && matches!(self.chars.peek(), Some((_, '/'))) {
                self.chars.next();
                return;
            }
        }
    }

    fn skip_string(&mut self, quote: char) {
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '\n' => return,
                c if c == quote => return,
                _ => {}
            }
        }
    }
}
