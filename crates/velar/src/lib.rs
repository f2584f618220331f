//! Velar: selector-discipline linter for WebDriver-style UI tests.
//!
//! Velar (Spanish: "to keep watch") flags every element-lookup call whose CSS
//! selector is not a single, well-formed attribute selector on the designated
//! test-hook attribute (`data-selenium` by default). UI automation that leans
//! on structural selectors — tags, classes, ids, combinators — breaks whenever
//! markup or styling changes; restricting lookups to a dedicated hook
//! attribute keeps tests decoupled from page structure.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      VELAR Pipeline                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────┐   ┌─────────┐   ┌────────┐   ┌──────────┐        │
//! │  │ Rust   │   │ Call-   │   │Selector│   │ Selector │        │
//! │  │ source │──►│ site    │──►│ parser │──►│classifier│──►diag │
//! │  │ (syn)  │   │ scanner │   │        │   │          │        │
//! │  └────────┘   └─────────┘   └────────┘   └──────────┘        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The parser is total: malformed selector text never fails a parse, it
//! degrades into marker components plus an error flag, which the classifier
//! treats as ordinary (Forbidden) data.
//!
//! # Example
//!
//! ```
//! use velar::{classify, parse, Verdict};
//!
//! assert_eq!(classify(&parse("[data-selenium='hotel-item']")), Verdict::Permitted);
//! assert_eq!(classify(&parse("form button.login-button")), Verdict::Forbidden);
//! ```

#![warn(missing_docs)]

pub mod linter;
pub mod policy;
pub mod report;
pub mod result;
pub mod scan;
pub mod selector;

pub use linter::SelectorLinter;
pub use policy::{classify, Policy, Verdict, DATA_SELENIUM};
pub use report::{
    forbidden_selector_message, hook_suggestion, render_report, render_report_json, Diagnostic,
    ScanReport, Severity, RULE_SELECTOR_HOOK,
};
pub use result::{VelarError, VelarResult};
pub use scan::{
    locator_call_site, scan_call, scan_source, CallShape, HookSelectorVisitor, LocatorCallSite,
};
pub use selector::{parse, Combinator, ParsedSelector, SimpleSelector};
