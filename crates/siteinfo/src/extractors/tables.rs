// ABOUTME: Tabular section extraction: row containers, per-row column maps, sub-record assembly.
// ABOUTME: An absent container is an error; an empty cell within a present row is not.

//! Row-container extraction for the tabular sections.
//!
//! Each section locates its row container via the selector table, then walks
//! `tr` rows in document order with a fixed column-to-sub-field mapping.
//! Rows are never skipped: a row with an empty or missing cell produces a
//! sub-record with an empty string in that slot. Only a container the
//! selector cannot find at all is an error, since the provider omits whole
//! sections from the page when it has nothing to show for them.

use scraper::{ElementRef, Html};

use crate::error::ParseError;
use crate::extractors::scalar;
use crate::extractors::select::{self, Queryable};
use crate::record::{Keyword, Link, Subdomain, Upstream, Visitor};
use crate::selectors;

const ROW: &str = "tr";

/// Locates a section's row container, failing when the selector matches nothing.
fn container<'a>(doc: &'a Html, css: &str, section: &str) -> Result<ElementRef<'a>, ParseError> {
    select::nodes(doc, css)
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::table_absent(section))
}

/// True when the page carries the no-statistics marker node.
pub fn has_no_data_marker(doc: &Html) -> bool {
    !select::nodes(doc, selectors::NO_DATA).is_empty()
}

/// Visitor share per country. Columns: country link, percent span, rank span.
///
/// The rank cell is optional data; a rank that is missing or unparsable
/// stays 0 rather than failing the row.
pub fn visitors(doc: &Html) -> Result<Vec<Visitor>, ParseError> {
    let body = container(doc, selectors::VISITORS, "visitors")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        let spans = select::nodes(&row, "td span");
        let percent = spans
            .first()
            .map(|cell| cell.text_content())
            .unwrap_or_default();
        let local_rank = spans
            .last()
            .and_then(|cell| scalar::parse_uint(&cell.text_content(), "visitor rank").ok())
            .unwrap_or(0);

        out.push(Visitor {
            country: select::cell_text(&row, "td a"),
            percent,
            local_rank,
        });
    }

    Ok(out)
}

/// Top search keywords. Columns: ordinal span + keyword span, percent span.
pub fn keywords(doc: &Html) -> Result<Vec<Keyword>, ParseError> {
    let body = container(doc, selectors::KEYWORDS, "keywords")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        out.push(Keyword {
            word: select::cell_text(&row, "td:first-child span:last-child"),
            percent: select::cell_text(&row, "td:last-child span"),
        });
    }

    Ok(out)
}

/// Upstream sites visited immediately before this one.
pub fn upstreams(doc: &Html) -> Result<Vec<Upstream>, ParseError> {
    let body = container(doc, selectors::UPSTREAMS, "upstream sites")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        out.push(Upstream {
            site: select::cell_text(&row, "td a"),
            percent: select::cell_text(&row, "td:last-child span"),
        });
    }

    Ok(out)
}

/// Inbound links: referring site name plus the specific referring page URL.
pub fn links_from(doc: &Html) -> Result<Vec<Link>, ParseError> {
    let body = container(doc, selectors::LINKS_FROM, "linking sites")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        out.push(Link {
            site: select::cell_text(&row, "span.word-wrap a"),
            page: select::first_attr(&row, "a.word-wrap", "href").unwrap_or_default(),
        });
    }

    Ok(out)
}

/// Sites with overlapping audiences, one per row.
pub fn related(doc: &Html) -> Result<Vec<String>, ParseError> {
    let body = container(doc, selectors::RELATED, "related sites")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        out.push(select::cell_text(&row, "a"));
    }

    Ok(out)
}

/// Directory categories. Rows hold breadcrumb runs of several anchors, so
/// every anchor under the container is collected in document order.
pub fn categories(doc: &Html) -> Result<Vec<String>, ParseError> {
    let body = container(doc, selectors::CATEGORIES, "categories")?;

    Ok(select::nodes(&body, "a")
        .iter()
        .map(|anchor| anchor.text_content())
        .collect())
}

/// Subdomains visitors continue to, with their traffic share.
pub fn subdomains(doc: &Html) -> Result<Vec<Subdomain>, ParseError> {
    let body = container(doc, selectors::SUBDOMAINS, "subdomains")?;

    let mut out = Vec::new();
    for row in select::nodes(&body, ROW) {
        out.push(Subdomain {
            domain: select::cell_text(&row, "td:first-child span"),
            percent: select::cell_text(&row, "td:last-child span"),
        });
    }

    Ok(out)
}
