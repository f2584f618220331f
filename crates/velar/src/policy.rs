//! Selector classification policy.
//!
//! A selector is *Permitted* only when it is a single, well-formed attribute
//! selector on the designated test-hook attribute. Everything else is
//! *Forbidden*: structural selectors (tags, classes, ids), compound selectors
//! that merely contain the hook attribute, and any selector the parser marked
//! as malformed. The strictness is deliberate — a compound selector such as
//! `tag[data-selenium=x]` still couples the test to markup structure.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::selector::{ParsedSelector, SimpleSelector};

/// The designated test-hook attribute.
pub const DATA_SELENIUM: &str = "data-selenium";

/// Binary classification outcome for a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Exactly one well-formed attribute selector on the designated attribute
    Permitted,
    /// Anything else, including malformed input
    Forbidden,
}

impl Verdict {
    /// Whether the selector passed the policy.
    #[must_use]
    pub const fn is_permitted(self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Classification policy bound to a designated attribute name.
///
/// The default policy uses [`DATA_SELENIUM`]; the attribute override exists as
/// the single configuration extension point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    attribute: Cow<'static, str>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            attribute: Cow::Borrowed(DATA_SELENIUM),
        }
    }
}

impl Policy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the designated attribute name.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Cow::Owned(attribute.into());
        self
    }

    /// The designated attribute name.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Classify a parsed selector.
    ///
    /// Pure and total: Permitted iff the parse had no error, the sequence has
    /// exactly one component, and that component is an attribute selector
    /// whose name equals the designated attribute (case-sensitive).
    #[must_use]
    pub fn classify(&self, parsed: &ParsedSelector) -> Verdict {
        if parsed.had_error {
            return Verdict::Forbidden;
        }
        match parsed.components.as_slice() {
            [SimpleSelector::Attribute { name, .. }] if name == self.attribute() => {
                Verdict::Permitted
            }
            _ => Verdict::Forbidden,
        }
    }
}

/// Classify a parsed selector under the default `data-selenium` policy.
#[must_use]
pub fn classify(parsed: &ParsedSelector) -> Verdict {
    Policy::default().classify(parsed)
}
