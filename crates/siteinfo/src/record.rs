// ABOUTME: The Site record and sub-record types produced by the extraction pipeline.
// ABOUTME: Includes ParseOutcome, the partial-record-plus-first-error result carrier.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Website traffic statistics extracted from one site-info page.
///
/// List fields preserve document order, which is the provider's relevance
/// order. A `Site` returned alongside an error holds whatever was extracted
/// before the failure; every later field is in its zero state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub main_country: String,
    pub global_rank: u64,
    pub local_rank: u64,
    pub linking_total: u64,
    pub visitors: Vec<Visitor>,
    pub keywords: Vec<Keyword>,
    pub upstreams: Vec<Upstream>,
    pub links_from: Vec<Link>,
    pub related: Vec<String>,
    pub categories: Vec<String>,
    pub subdomains: Vec<Subdomain>,
}

/// One country's share of the site's visitors.
///
/// `percent` keeps the provider's rendering (e.g. `"83.8%"`); callers
/// needing a numeric value parse downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub country: String,
    pub percent: String,
    pub local_rank: u64,
}

/// A top search keyword sending traffic to the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub percent: String,
}

/// A site people visited immediately before this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upstream {
    pub site: String,
    pub percent: String,
}

/// A subdomain visitors continue to from the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdomain {
    pub domain: String,
    pub percent: String,
}

/// A referring site and the specific page on it that links here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub site: String,
    pub page: String,
}

/// Result of one extraction run: the record as accumulated up to the first
/// fatal error, plus that error when one occurred.
///
/// Keeping the partial record lets callers log which stage a markup change
/// broke without losing the already-extracted prefix.
#[derive(Debug)]
pub struct ParseOutcome {
    pub site: Site,
    pub error: Option<ParseError>,
}

impl ParseOutcome {
    /// An outcome with every field extracted.
    pub fn complete(site: Site) -> Self {
        Self { site, error: None }
    }

    /// An outcome halted by `error`, carrying the fields extracted so far.
    pub fn failed(site: Site, error: ParseError) -> Self {
        Self {
            site,
            error: Some(error),
        }
    }

    /// Returns true when extraction ran to the end without an error.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Converts to a plain `Result`, discarding the partial record on error.
    pub fn into_result(self) -> Result<Site, ParseError> {
        match self.error {
            None => Ok(self.site),
            Some(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_complete() {
        let outcome = ParseOutcome::complete(Site {
            title: "Example".to_string(),
            ..Default::default()
        });
        assert!(outcome.is_complete());
        let site = outcome.into_result().unwrap();
        assert_eq!(site.title, "Example");
    }

    #[test]
    fn into_result_discards_partial_record() {
        let outcome = ParseOutcome::failed(
            Site {
                global_rank: 506,
                ..Default::default()
            },
            ParseError::field_not_found("local rank"),
        );
        assert!(!outcome.is_complete());
        assert_eq!(outcome.site.global_rank, 506);
        let err = outcome.into_result().unwrap_err();
        assert!(err.is_field_not_found());
        assert_eq!(err.field, "local rank");
    }
}
