// ABOUTME: Scalar field extraction: first-match text lookup and grouped-integer parsing.
// ABOUTME: Failures carry the logical field name for markup-drift diagnostics.

use crate::error::ParseError;
use crate::extractors::select::{self, Queryable};

/// Extracts a required text field: the first node matched by `css`,
/// whitespace-normalized.
///
/// No match, or a match with only empty text, is a FieldNotFound error
/// naming `field`.
pub fn text_field<Q: Queryable>(scope: &Q, css: &str, field: &str) -> Result<String, ParseError> {
    select::first_text(scope, css).ok_or_else(|| ParseError::field_not_found(field))
}

/// Extracts a required unsigned-integer field.
pub fn uint_field<Q: Queryable>(scope: &Q, css: &str, field: &str) -> Result<u64, ParseError> {
    let raw = text_field(scope, css, field)?;
    parse_uint(&raw, field)
}

/// Parses an unsigned integer after stripping grouping commas.
///
/// The provider renders large integers with locale grouping punctuation
/// (`1,234,567`), so separators are removed before parsing.
pub fn parse_uint(raw: &str, field: &str) -> Result<u64, ParseError> {
    let digits = raw.replace(',', "");
    digits.parse::<u64>().map_err(|err| {
        ParseError::malformed_number(field, Some(anyhow::anyhow!("{:?}: {}", raw, err)))
    })
}
