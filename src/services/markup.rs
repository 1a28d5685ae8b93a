//! Markup extraction primitives.
//!
//! A [`Query`] is a compiled CSS selector with optional text predicates, built
//! from a [`QuerySpec`]. Matching happens in document order, so `select_one`
//! returns the first element that satisfies both the selector and the text
//! predicates.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::QuerySpec;

/// A compiled selector with text predicates.
#[derive(Debug)]
pub struct Query {
    selector: Selector,
    contains: Vec<String>,
    excludes: Vec<String>,
}

impl Query {
    /// Compile a query, failing on invalid CSS.
    pub fn compile(spec: &QuerySpec) -> Result<Self> {
        let selector = Selector::parse(&spec.css)
            .map_err(|e| AppError::selector(&spec.css, format!("{e:?}")))?;

        Ok(Self {
            selector,
            contains: spec.contains.clone(),
            excludes: spec.excludes.clone(),
        })
    }

    /// All matching elements in document order.
    pub fn select<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document
            .select(&self.selector)
            .filter(move |node| self.matches_text(node))
    }

    /// The first matching element, if any.
    pub fn select_one<'a>(&'a self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.select(document).next()
    }

    fn matches_text(&self, node: &ElementRef) -> bool {
        if self.contains.is_empty() && self.excludes.is_empty() {
            return true;
        }

        let full_text: String = node.text().collect();
        let wanted = self.contains.is_empty()
            || self.contains.iter().any(|needle| full_text.contains(needle));
        let rejected = self.excludes.iter().any(|needle| full_text.contains(needle));

        wanted && !rejected
    }
}

/// Text of an element with every text fragment trimmed and concatenated.
///
/// `<p><b>Fone:</b> 3366-9999</p>` yields `"Fone:3366-9999"`.
pub fn text(node: ElementRef) -> String {
    node.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Value of an attribute on an element.
pub fn attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}
