//! Tolerant CSS selector parsing.
//!
//! The parser turns a raw selector string into an ordered sequence of
//! simple-selector components. It is a total function: malformed input never
//! fails the parse, it degrades into [`SimpleSelector::Malformed`] components
//! (or a partial attribute selector) plus the [`ParsedSelector::had_error`]
//! flag, and scanning always continues to end-of-input.
//!
//! Only the subset of the selector grammar that matters for classification is
//! modeled: type, class, id, and attribute selectors, plus combinators. The
//! policy layer never needs specificity, pseudo-classes, or namespaces.

use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::Chars;

/// Combinator token joining compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combinator {
    /// Whitespace between two selectors
    Descendant,
    /// `>`
    Child,
    /// `+`
    Adjacent,
    /// `~`
    Sibling,
}

/// A single simple-selector component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimpleSelector {
    /// Bare element-type token, e.g. `form` or `*`
    Type(String),
    /// `.class`
    Class(String),
    /// `#id`
    Id(String),
    /// `[name=value]`, `[name='value']`, or `[name]`
    Attribute {
        /// Attribute name, compared case-sensitively
        name: String,
        /// Attribute value; empty when absent
        value: String,
        /// Whether the value was quoted (never affects classification)
        quoted: bool,
    },
    /// Combinator between compound selectors
    Combinator(Combinator),
    /// Marker for an unrecognized token run
    Malformed,
}

impl SimpleSelector {
    /// Whether this component is a combinator.
    #[must_use]
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Self::Combinator(_))
    }

    /// Whether this component is an attribute selector.
    #[must_use]
    pub const fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute { .. })
    }
}

/// Result of parsing a selector string.
///
/// Components appear in source order; the parser never reorders. `had_error`
/// is set whenever a `Malformed` component was produced or an attribute
/// selector was left unterminated, and a set flag always forces a Forbidden
/// verdict downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSelector {
    /// Ordered component sequence
    pub components: Vec<SimpleSelector>,
    /// Whether any structural error was encountered
    pub had_error: bool,
}

impl ParsedSelector {
    /// The single component of the sequence, if there is exactly one.
    #[must_use]
    pub fn single_component(&self) -> Option<&SimpleSelector> {
        match self.components.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn is_component_start(c: char) -> bool {
    matches!(c, '.' | '#' | '[' | '*' | '>' | '+' | '~') || is_ident_char(c)
}

fn take_identifier(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Consume an attribute selector after the opening `[`.
///
/// Returns the component and whether the closing `]` was found. The operator
/// (`=` or one of the two-character CSS forms) is consumed but not retained;
/// classification only needs the name and well-formedness.
fn take_attribute(chars: &mut Peekable<Chars<'_>>) -> (SimpleSelector, bool) {
    skip_spaces(chars);
    let name = take_identifier(chars);
    skip_spaces(chars);

    match chars.peek() {
        Some('~' | '^' | '$' | '*' | '|') => {
            let mut lookahead = chars.clone();
            lookahead.next();
            if lookahead.peek() == Some(&'=') {
                chars.next();
                chars.next();
            }
        }
        Some('=') => {
            chars.next();
        }
        _ => {}
    }
    skip_spaces(chars);

    let mut quoted = false;
    let mut value = String::new();
    match chars.peek() {
        Some(&quote @ ('\'' | '"')) => {
            quoted = true;
            chars.next();
            // An unterminated quote runs to end-of-input; the missing `]`
            // below is what marks the parse as errored.
            for c in chars.by_ref() {
                if c == quote {
                    break;
                }
                value.push(c);
            }
        }
        _ => value = take_identifier(chars),
    }
    skip_spaces(chars);

    let closed = chars.peek() == Some(&']');
    if closed {
        chars.next();
    }
    (SimpleSelector::Attribute { name, value, quoted }, closed)
}

/// Parse a raw selector string into its component sequence.
///
/// Total function: never fails and never panics, whatever the input. A single
/// left-to-right scan with no backtracking; leading and trailing whitespace is
/// insignificant, whitespace between two non-combinator components becomes a
/// descendant combinator.
#[must_use]
pub fn parse(input: &str) -> ParsedSelector {
    let mut components: Vec<SimpleSelector> = Vec::new();
    let mut had_error = false;
    let mut chars = input.chars().peekable();
    let mut pending_ws = false;

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            pending_ws = true;
            continue;
        }

        if let Some(kind) = match c {
            '>' => Some(Combinator::Child),
            '+' => Some(Combinator::Adjacent),
            '~' => Some(Combinator::Sibling),
            _ => None,
        } {
            chars.next();
            pending_ws = false;
            components.push(SimpleSelector::Combinator(kind));
            continue;
        }

        // Whitespace only separates when it sits between two non-combinator
        // components; around an explicit combinator it is insignificant.
        if pending_ws && matches!(components.last(), Some(prev) if !prev.is_combinator()) {
            components.push(SimpleSelector::Combinator(Combinator::Descendant));
        }
        pending_ws = false;

        match c {
            '.' => {
                chars.next();
                components.push(SimpleSelector::Class(take_identifier(&mut chars)));
            }
            '#' => {
                chars.next();
                components.push(SimpleSelector::Id(take_identifier(&mut chars)));
            }
            '[' => {
                chars.next();
                let (component, closed) = take_attribute(&mut chars);
                if !closed {
                    had_error = true;
                }
                components.push(component);
            }
            '*' => {
                chars.next();
                components.push(SimpleSelector::Type("*".to_string()));
            }
            c if is_ident_char(c) => {
                components.push(SimpleSelector::Type(take_identifier(&mut chars)));
            }
            _ => {
                // Unrecognized token run: absorb and resume after it.
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || is_component_start(c) {
                        break;
                    }
                    chars.next();
                }
                had_error = true;
                components.push(SimpleSelector::Malformed);
            }
        }
    }

    ParsedSelector {
        components,
        had_error,
    }
}
