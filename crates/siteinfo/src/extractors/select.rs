// ABOUTME: Query primitives shared by document-level and row-level extraction.
// ABOUTME: Defines the Queryable trait plus text and attribute helpers with whitespace normalization.

//! Selector-based query primitives.
//!
//! [`Queryable`] abstracts over "something selectors can be evaluated
//! against": the whole document, or a single element such as a table row.
//! Scalar extraction and per-row table extraction both go through it, so one
//! set of text/attribute helpers serves every field.
//!
//! Key behaviors:
//! - Matches are returned in document order.
//! - Text extraction joins inner text and normalizes whitespace.
//! - An invalid selector behaves like a selector that matches nothing.

use scraper::{ElementRef, Html, Selector};

use crate::extractors::compiled::get_or_compile;

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A node scope selectors can be evaluated against.
pub trait Queryable {
    /// All elements under this scope matching `selector`, in document order.
    fn locate<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>>;

    /// Concatenated, whitespace-normalized text of this scope.
    fn text_content(&self) -> String;
}

impl Queryable for Html {
    fn locate<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn text_content(&self) -> String {
        normalize_whitespace(&self.root_element().text().collect::<String>())
    }
}

impl<'b> Queryable for ElementRef<'b> {
    fn locate<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }

    fn text_content(&self) -> String {
        normalize_whitespace(&self.text().collect::<String>())
    }
}

/// All elements under `scope` matching `css`, in document order.
pub fn nodes<'a, Q: Queryable>(scope: &'a Q, css: &str) -> Vec<ElementRef<'a>> {
    match get_or_compile(css) {
        Some(selector) => scope.locate(&selector),
        None => Vec::new(),
    }
}

/// Normalized text of the first match, or `None` when nothing matches or the
/// first match has only empty text.
pub fn first_text<Q: Queryable>(scope: &Q, css: &str) -> Option<String> {
    let matched = nodes(scope, css);
    let first = matched.first()?;
    let text = first.text_content();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Text of the first match, or an empty string when there is none.
///
/// Row cells use this: a missing cell yields an empty field, not an error.
pub fn cell_text<Q: Queryable>(scope: &Q, css: &str) -> String {
    match nodes(scope, css).first() {
        Some(el) => el.text_content(),
        None => String::new(),
    }
}

/// The first match carrying a non-empty `attr` value, trimmed.
pub fn first_attr<Q: Queryable>(scope: &Q, css: &str, attr: &str) -> Option<String> {
    for el in nodes(scope, css) {
        if let Some(value) = el.value().attr(attr) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
