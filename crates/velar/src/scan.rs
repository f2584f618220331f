//! Call-site scanner for element-lookup invocations.
//!
//! Uses the `syn` crate for Rust AST traversal, the same way the rest of the
//! ecosystem's source linters do. Every method-call expression is matched
//! against a fixed table of WebDriver-style locator APIs; for a match, the
//! literal selector argument is extracted, parsed, and classified, and a
//! diagnostic is produced at the argument's exact source position when the
//! selector is Forbidden.
//!
//! ## Recognized call shapes
//!
//! | Shape | Selector argument |
//! |-------|-------------------|
//! | `receiver.find_element(By::css(<expr>))` | `<expr>` inside the nested call |
//! | `receiver.find_elements(By::css(<expr>))` | `<expr>` inside the nested call |
//! | `receiver.find_element_by_css_selector(<expr>)` | `<expr>` directly |
//! | `receiver.find_elements_by_css_selector(<expr>)` | `<expr>` directly |
//!
//! Matching is on the invoked method name, regardless of the receiver. The
//! nested locator builder accepts `By::css`, `By::Css`, `By::css_selector`,
//! and `By::CssSelector` spellings, matched on the final two path segments.
//!
//! The scanner never panics: an unrecognized call shape or an unresolvable
//! (non-literal) selector argument is a silent skip, and selector
//! malformation is ordinary data flowing into a Forbidden verdict.

use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLit, ExprMethodCall, Lit};

use crate::policy::{Policy, Verdict};
use crate::report::{
    forbidden_selector_message, hook_suggestion, Diagnostic, ScanReport, RULE_SELECTOR_HOOK,
};
use crate::result::{VelarError, VelarResult};
use crate::selector::parse;

/// Locator-builder path spellings accepted inside the generic find methods
const BY_CSS_CONSTRUCTORS: &[&str] = &["css", "Css", "css_selector", "CssSelector"];

/// A recognized locator call shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShape {
    /// `find_element(By::css(..))`
    FindElement,
    /// `find_elements(By::css(..))`
    FindElements,
    /// `find_element_by_css_selector(..)`
    FindElementByCssSelector,
    /// `find_elements_by_css_selector(..)`
    FindElementsByCssSelector,
}

impl CallShape {
    /// Match a method name against the fixed shape table.
    #[must_use]
    pub fn from_method_name(name: &str) -> Option<Self> {
        match name {
            "find_element" => Some(Self::FindElement),
            "find_elements" => Some(Self::FindElements),
            "find_element_by_css_selector" => Some(Self::FindElementByCssSelector),
            "find_elements_by_css_selector" => Some(Self::FindElementsByCssSelector),
            _ => None,
        }
    }

    /// The method name this shape matches.
    #[must_use]
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::FindElement => "find_element",
            Self::FindElements => "find_elements",
            Self::FindElementByCssSelector => "find_element_by_css_selector",
            Self::FindElementsByCssSelector => "find_elements_by_css_selector",
        }
    }

    /// Whether the selector argument is passed directly (no `By::css` wrapper).
    #[must_use]
    pub const fn takes_selector_directly(self) -> bool {
        matches!(
            self,
            Self::FindElementByCssSelector | Self::FindElementsByCssSelector
        )
    }
}

/// A matched locator call with its resolved selector literal.
///
/// Constructed transiently per call expression and discarded after
/// classification; nothing is cached across nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorCallSite {
    /// The matched call shape
    pub shape: CallShape,
    /// Resolved selector text
    pub selector: String,
    /// Line of the selector argument (1-indexed)
    pub line: usize,
    /// Column of the selector argument (1-indexed)
    pub column: usize,
}

/// Match the shape of a method call against the fixed table.
fn call_shape_of(node: &ExprMethodCall) -> Option<CallShape> {
    CallShape::from_method_name(&node.method.to_string())
}

/// Extract the inner argument of a `By::css`-family locator builder.
fn by_css_argument(expr: &Expr) -> Option<&Expr> {
    let Expr::Call(ExprCall { func, args, .. }) = expr else {
        return None;
    };
    let Expr::Path(path_expr) = &**func else {
        return None;
    };
    let segments = &path_expr.path.segments;
    if segments.len() < 2 {
        return None;
    }
    let constructor = segments[segments.len() - 1].ident.to_string();
    if segments[segments.len() - 2].ident != "By"
        || !BY_CSS_CONSTRUCTORS.contains(&constructor.as_str())
    {
        return None;
    }
    if args.len() != 1 {
        return None;
    }
    args.first()
}

/// Resolve an expression to a plain string literal.
///
/// Only literal values are classifiable; anything computed (identifiers,
/// `format!`, concatenation) is unresolvable and returns `None` so the caller
/// skips analysis rather than guessing.
fn resolve_string_literal(expr: &Expr) -> Option<(String, proc_macro2::Span)> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Some((lit.value(), lit.span())),
        Expr::Reference(reference) => resolve_string_literal(&reference.expr),
        Expr::Paren(paren) => resolve_string_literal(&paren.expr),
        _ => None,
    }
}

/// Convert a span to the 1-indexed position of its first character.
///
/// proc-macro2 lines are already 1-indexed; columns are 0-indexed.
fn span_start_of(span: proc_macro2::Span) -> (usize, usize) {
    let start = span.start();
    (start.line, start.column + 1)
}

/// Match one method-call node against the locator table and resolve its
/// selector literal. Returns `None` for non-matching shapes and for
/// unresolvable arguments.
#[must_use]
pub fn locator_call_site(node: &ExprMethodCall) -> Option<LocatorCallSite> {
    let shape = call_shape_of(node)?;
    if node.args.len() != 1 {
        return None;
    }
    let argument = node.args.first()?;
    let selector_expr = if shape.takes_selector_directly() {
        argument
    } else {
        by_css_argument(argument)?
    };
    let (selector, span) = resolve_string_literal(selector_expr)?;
    let (line, column) = span_start_of(span);
    Some(LocatorCallSite {
        shape,
        selector,
        line,
        column,
    })
}

/// Scan one call-expression node, producing zero or one diagnostic.
#[must_use]
pub fn scan_call(node: &ExprMethodCall, policy: &Policy, file: &str) -> Option<Diagnostic> {
    let site = locator_call_site(node)?;
    let parsed = parse(&site.selector);
    if policy.classify(&parsed) == Verdict::Permitted {
        return None;
    }
    tracing::debug!(
        method = site.shape.method_name(),
        selector = %site.selector,
        "forbidden selector at {}:{}:{}",
        file,
        site.line,
        site.column
    );
    Some(
        Diagnostic::error(
            file,
            RULE_SELECTOR_HOOK,
            forbidden_selector_message(site.shape.method_name(), policy.attribute()),
        )
        .at_line(site.line)
        .at_column(site.column)
        .with_suggestion(hook_suggestion(policy.attribute())),
    )
}

/// AST visitor collecting selector-hook diagnostics.
pub struct HookSelectorVisitor<'a> {
    policy: &'a Policy,
    file: String,
    /// Collected diagnostics
    pub diagnostics: Vec<Diagnostic>,
}

impl std::fmt::Debug for HookSelectorVisitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookSelectorVisitor")
            .field("file", &self.file)
            .field("diagnostics_count", &self.diagnostics.len())
            .finish()
    }
}

impl<'a> HookSelectorVisitor<'a> {
    /// Create a visitor for one file.
    #[must_use]
    pub fn new(policy: &'a Policy, file: impl Into<String>) -> Self {
        Self {
            policy,
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }
}

impl<'ast> Visit<'ast> for HookSelectorVisitor<'_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if let Some(diagnostic) = scan_call(node, self.policy, &self.file) {
            self.diagnostics.push(diagnostic);
        }
        // Keep walking: receivers and arguments can hold further locator calls
        syn::visit::visit_expr_method_call(self, node);
    }
}

/// Parse Rust source and scan every call expression.
///
/// A source that does not parse is a host-level error; the scanner itself
/// never fails on any selector text or call shape.
pub fn scan_source(source: &str, file: &str, policy: &Policy) -> VelarResult<ScanReport> {
    let syntax = syn::parse_file(source).map_err(|e| VelarError::SourceParse {
        file: file.to_string(),
        message: e.to_string(),
    })?;

    let mut visitor = HookSelectorVisitor::new(policy, file);
    visitor.visit_file(&syntax);

    Ok(ScanReport {
        diagnostics: visitor.diagnostics,
        files_analyzed: 1,
        files_skipped: 0,
        lines_analyzed: source.lines().count(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scan(source: &str) -> ScanReport {
        scan_source(source, "test.rs", &Policy::default()).expect("source should parse")
    }

    /// 1-indexed column of `needle` on `line` of `source`.
    fn column_of(source: &str, line: usize, needle: &str) -> usize {
        source.lines().nth(line - 1).unwrap().find(needle).unwrap() + 1
    }

    mod shape_tests {
        use super::*;

        #[test]
        fn test_method_name_table() {
            assert_eq!(
                CallShape::from_method_name("find_element"),
                Some(CallShape::FindElement)
            );
            assert_eq!(
                CallShape::from_method_name("find_elements_by_css_selector"),
                Some(CallShape::FindElementsByCssSelector)
            );
            assert_eq!(CallShape::from_method_name("query_selector"), None);
        }

        #[test]
        fn test_direct_shapes() {
            assert!(CallShape::FindElementByCssSelector.takes_selector_directly());
            assert!(!CallShape::FindElement.takes_selector_directly());
        }
    }

    mod site_extraction_tests {
        use super::*;

        fn site_of(expr: &str) -> Option<LocatorCallSite> {
            let Expr::MethodCall(call) = syn::parse_str::<Expr>(expr).unwrap() else {
                panic!("expected a method call expression");
            };
            locator_call_site(&call)
        }

        #[test]
        fn test_wrapped_shape_resolves() {
            let site = site_of(r#"driver.find_element(By::css(".login"))"#).unwrap();
            assert_eq!(site.shape, CallShape::FindElement);
            assert_eq!(site.selector, ".login");
        }

        #[test]
        fn test_direct_shape_resolves() {
            let site = site_of(r##"driver.find_elements_by_css_selector("#id")"##).unwrap();
            assert_eq!(site.shape, CallShape::FindElementsByCssSelector);
            assert_eq!(site.selector, "#id");
        }

        #[test]
        fn test_by_constructor_spellings() {
            for constructor in ["css", "Css", "css_selector", "CssSelector"] {
                let expr = format!(r#"driver.find_element(By::{constructor}("a"))"#);
                assert!(site_of(&expr).is_some(), "By::{constructor} should match");
            }
        }

        #[test]
        fn test_qualified_by_path_matches() {
            let site = site_of(r#"driver.find_element(webdriver::By::Css("a"))"#).unwrap();
            assert_eq!(site.selector, "a");
        }

        #[test]
        fn test_other_by_variants_skipped() {
            assert!(site_of(r#"driver.find_element(By::xpath("//a"))"#).is_none());
            assert!(site_of(r#"driver.find_element(By::id("main"))"#).is_none());
        }

        #[test]
        fn test_unrecognized_method_skipped() {
            assert!(site_of(r#"driver.query_selector(".x")"#).is_none());
        }

        #[test]
        fn test_non_literal_argument_skipped() {
            assert!(site_of("driver.find_element_by_css_selector(selector)").is_none());
            assert!(site_of(r#"driver.find_element(By::css(format!("[x={}]", v)))"#).is_none());
        }

        #[test]
        fn test_reference_to_literal_resolves() {
            let site = site_of(r##"driver.find_element_by_css_selector(&"#id")"##).unwrap();
            assert_eq!(site.selector, "#id");
        }

        #[test]
        fn test_wrong_arity_skipped() {
            assert!(site_of(r#"driver.find_element(By::css("a"), timeout)"#).is_none());
        }
    }

    mod source_scan_tests {
        use super::*;

        #[test]
        fn test_forbidden_selector_reported() {
            let source = r#"
fn login(driver: &WebDriver) {
    let button = driver.find_element(By::css("form button.login-button"));
}
"#;
            let report = scan(source);
            assert_eq!(report.violation_count(), 1);

            let diagnostic = &report.diagnostics[0];
            assert_eq!(diagnostic.rule, RULE_SELECTOR_HOOK);
            assert_eq!(diagnostic.line, 3);
            assert_eq!(
                diagnostic.column,
                column_of(source, 3, r#""form button.login-button""#)
            );
            assert!(diagnostic.message.contains("find_element()"));
        }

        #[test]
        fn test_permitted_selector_not_reported() {
            let source = r#"
fn hotels(driver: &WebDriver) {
    let items = driver.find_elements(By::css("[data-selenium='hotel-item']"));
    let item = driver.find_element_by_css_selector("[data-selenium=hotel-item]");
}
"#;
            let report = scan(source);
            assert!(!report.has_violations());
            assert_eq!(report.files_analyzed, 1);
        }

        #[test]
        fn test_both_shapes_detected_identically() {
            let source = r#"
fn probe(driver: &WebDriver) {
    let a = driver.find_elements(By::css(".class"));
    let b = driver.find_elements_by_css_selector(".class");
}
"#;
            let report = scan(source);
            assert_eq!(report.violation_count(), 2);
            assert_eq!(report.diagnostics[0].line, 3);
            assert_eq!(report.diagnostics[1].line, 4);
            assert_eq!(
                report.diagnostics[0].column,
                column_of(source, 3, r#"".class""#)
            );
            assert_eq!(
                report.diagnostics[1].column,
                column_of(source, 4, r#"".class""#)
            );
        }

        #[test]
        fn test_unterminated_hook_selector_reported() {
            let source = r#"
fn broken(driver: &WebDriver) {
    driver.find_element(By::css("[data-selenium=unterminated"));
}
"#;
            let report = scan(source);
            assert_eq!(report.violation_count(), 1);
        }

        #[test]
        fn test_chained_and_awaited_calls_found() {
            let source = r##"
async fn chained(driver: &WebDriver) {
    let text = driver
        .find_element(By::css("#content"))
        .await
        .unwrap()
        .text();
}
"##;
            let report = scan(source);
            assert_eq!(report.violation_count(), 1);
            assert_eq!(report.diagnostics[0].line, 4);
        }

        #[test]
        fn test_computed_selector_skipped() {
            let source = r#"
fn dynamic(driver: &WebDriver, id: &str) {
    let selector = format!("[data-selenium={id}]");
    driver.find_element_by_css_selector(&selector);
}
"#;
            let report = scan(source);
            assert!(!report.has_violations());
        }

        #[test]
        fn test_unrelated_calls_ignored() {
            let source = r#"
fn unrelated() {
    let list = vec![1, 2, 3];
    let doubled: Vec<_> = list.iter().map(|x| x * 2).collect();
}
"#;
            let report = scan(source);
            assert!(!report.has_violations());
        }

        #[test]
        fn test_custom_attribute_policy() {
            let source = r#"
fn testids(driver: &WebDriver) {
    driver.find_element(By::css("[data-testid=start]"));
    driver.find_element(By::css("[data-selenium=start]"));
}
"#;
            let policy = Policy::new().with_attribute("data-testid");
            let report = scan_source(source, "test.rs", &policy).unwrap();
            assert_eq!(report.violation_count(), 1);
            assert_eq!(report.diagnostics[0].line, 4);
            assert!(report.diagnostics[0].message.contains("data-testid"));
        }

        #[test]
        fn test_unparseable_source_is_error() {
            let result = scan_source("fn broken(", "bad.rs", &Policy::default());
            assert!(matches!(result, Err(VelarError::SourceParse { .. })));
        }

        #[test]
        fn test_lines_analyzed_counted() {
            let source = "fn empty() {}\n";
            let report = scan(source);
            assert_eq!(report.lines_analyzed, 1);
        }
    }
}
