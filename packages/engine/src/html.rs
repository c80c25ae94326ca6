//! HTML hyphenation.
//!
//! Parses a document, walks its tree and rewrites text nodes with
//! hyphenated content, leaving markup and attributes untouched. Which
//! nodes participate is decided by a [`NodeFilter`]: CSS selector lists
//! whose matches are computed once up front, then consulted during the
//! walk. An excluded subtree stops hyphenation for everything below it; an
//! included subtree switches it back on.

use std::rc::Rc;

use kuchikikiki::traits::TendrilSink;
use kuchikikiki::NodeRef;

use crate::error::Result;
use crate::hyphen::Hyphen;
use crate::patterns::PatternSet;
use crate::text::split_text;

/// Include/exclude rules for HTML hyphenation.
///
/// Rules are CSS selectors. Excludes win over the inherited state,
/// includes win over excludes, matching the original cascade.
#[derive(Debug, Clone, Default)]
pub struct NodeFilter {
    excludes: Vec<String>,
    includes: Vec<String>,
}

impl NodeFilter {
    /// A filter with no rules: every text node is hyphenated (except
    /// inside `script` and `style`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude every element; combine with include rules to hyphenate
    /// only selected subtrees.
    pub fn exclude_all(&mut self) {
        self.excludes.push("*".to_string());
    }

    /// Exclude elements by tag name.
    pub fn exclude_element(&mut self, element: &str) {
        self.excludes.push(element.to_string());
    }

    /// Exclude elements carrying an attribute, optionally with a value.
    pub fn exclude_attribute(&mut self, attribute: &str, value: Option<&str>) {
        self.excludes.push(attribute_selector(attribute, value));
    }

    /// Exclude everything matching a raw CSS selector.
    pub fn exclude_selector(&mut self, selector: &str) {
        self.excludes.push(selector.to_string());
    }

    /// Include elements by tag name.
    pub fn include_element(&mut self, element: &str) {
        self.includes.push(element.to_string());
    }

    /// Include elements carrying an attribute, optionally with a value.
    pub fn include_attribute(&mut self, attribute: &str, value: Option<&str>) {
        self.includes.push(attribute_selector(attribute, value));
    }

    /// Include everything matching a raw CSS selector.
    pub fn include_selector(&mut self, selector: &str) {
        self.includes.push(selector.to_string());
    }
}

fn attribute_selector(attribute: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("[{attribute}=\"{value}\"]"),
        None => format!("[{attribute}]"),
    }
}

/// Hyphenate the readable text of an HTML document.
///
/// Returns the serialized document; the parser synthesizes `<html>`,
/// `<head>` and `<body>` around fragments, the same way a browser would.
pub fn hyphenate_html(
    html: &str,
    set: &PatternSet,
    hyphen: &Hyphen,
    min_word_length: usize,
    filter: &NodeFilter,
) -> Result<String> {
    let document = kuchikikiki::parse_html().one(html);

    // Selector matches are computed once; the walk only tests membership.
    let excluded = select_nodes(&document, &filter.excludes);
    let included = select_nodes(&document, &filter.includes);

    process_node(&document, &excluded, &included, true, &|text| {
        hyphen.join_tree(&split_text(text, set, min_word_length))
    });

    let mut out = Vec::new();
    document.serialize(&mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// All nodes matching any of the selectors.
fn select_nodes(document: &NodeRef, selectors: &[String]) -> Vec<NodeRef> {
    let mut nodes = Vec::new();
    for selector in selectors {
        match document.select(selector) {
            Ok(matches) => nodes.extend(matches.map(|m| m.as_node().clone())),
            Err(()) => tracing::warn!(selector = %selector, "Ignoring invalid selector"),
        }
    }
    nodes
}

/// Depth-first walk carrying the inherited split flag.
fn process_node(
    node: &NodeRef,
    excluded: &[NodeRef],
    included: &[NodeRef],
    split: bool,
    rewrite: &dyn Fn(&str) -> String,
) {
    for child in node.children() {
        let mut split_child = split;
        if is_raw_text_element(&child) {
            // Script and style data is code, not prose.
            split_child = false;
        }
        if contains_node(excluded, &child) {
            split_child = false;
        }
        if contains_node(included, &child) {
            split_child = true;
        }
        process_node(&child, excluded, included, split_child, rewrite);
    }

    if split {
        if let Some(data) = node.as_text() {
            let original = data.borrow().clone();
            *data.borrow_mut() = rewrite(&original);
        }
    }
}

fn is_raw_text_element(node: &NodeRef) -> bool {
    node.as_element().is_some_and(|element| {
        let name: &str = &element.name.local;
        name == "script" || name == "style"
    })
}

fn contains_node(nodes: &[NodeRef], node: &NodeRef) -> bool {
    nodes.iter().any(|candidate| Rc::ptr_eq(&candidate.0, &node.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pattern_file;

    fn liang_set() -> PatternSet {
        let parsed = parse_pattern_file("\\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n}");
        PatternSet::new(
            parsed.patterns,
            parsed.max_pattern_length,
            parsed.exceptions,
            2,
            2,
        )
    }

    fn run(html: &str, filter: &NodeFilter) -> String {
        hyphenate_html(html, &liang_set(), &Hyphen::Dash, 0, filter).expect("serializes")
    }

    #[test]
    fn test_text_nodes_are_hyphenated() {
        let out = run("<p>hyphenation</p>", &NodeFilter::new());
        assert!(out.contains("hy-phen-ation"), "got: {out}");
    }

    #[test]
    fn test_markup_and_attributes_untouched() {
        let out = run("<p title=\"hyphenation\">hyphenation</p>", &NodeFilter::new());
        assert!(out.contains("title=\"hyphenation\""), "got: {out}");
        assert!(out.contains("hy-phen-ation"), "got: {out}");
    }

    #[test]
    fn test_excluded_subtree_is_skipped() {
        let mut filter = NodeFilter::new();
        filter.exclude_element("code");
        let out = run("<p>hyphenation <code>hyphenation</code></p>", &filter);
        assert!(out.contains("hy-phen-ation"), "got: {out}");
        assert!(out.contains("<code>hyphenation</code>"), "got: {out}");
    }

    #[test]
    fn test_include_overrides_exclude_all() {
        let mut filter = NodeFilter::new();
        filter.exclude_all();
        filter.include_element("em");
        let out = run("<p>hyphenation <em>hyphenation</em></p>", &filter);
        assert!(out.contains("<em>hy-phen-ation</em>"), "got: {out}");
        assert!(out.contains("<p>hyphenation "), "got: {out}");
    }

    #[test]
    fn test_exclude_by_attribute() {
        let mut filter = NodeFilter::new();
        filter.exclude_attribute("translate", Some("no"));
        let out = run(
            "<p>hyphenation</p><p translate=\"no\">hyphenation</p>",
            &filter,
        );
        assert!(out.contains("hy-phen-ation"), "got: {out}");
        assert!(out.contains(">hyphenation</p>"), "got: {out}");
    }

    #[test]
    fn test_script_content_is_never_hyphenated() {
        let out = run("<script>var hyphenation = 1;</script><p>hyphenation</p>", &NodeFilter::new());
        assert!(out.contains("var hyphenation = 1;"), "got: {out}");
        assert!(out.contains("hy-phen-ation"), "got: {out}");
    }

    #[test]
    fn test_invalid_selector_is_ignored() {
        let mut filter = NodeFilter::new();
        filter.exclude_selector("p[[");
        let out = run("<p>hyphenation</p>", &filter);
        assert!(out.contains("hy-phen-ation"), "got: {out}");
    }

    #[test]
    fn test_nested_exclude_inherits() {
        let mut filter = NodeFilter::new();
        filter.exclude_element("blockquote");
        let out = run(
            "<blockquote><p>hyphenation</p></blockquote><p>hyphenation</p>",
            &filter,
        );
        assert!(out.contains("<blockquote><p>hyphenation</p></blockquote>"), "got: {out}");
        assert!(out.contains("hy-phen-ation"), "got: {out}");
    }
}
