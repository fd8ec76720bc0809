// ABOUTME: The ordered extraction pipeline turning one HTML document into a Site record.
// ABOUTME: Fail-fast: the first field error stops the run and is returned with the partial record.

//! Document-to-record orchestration.
//!
//! Stages run in a fixed order, each gated on the success of the previous
//! one: the no-data check, the scalar fields, then the tabular sections.
//! The first failure halts the run, and the outcome carries whatever was
//! extracted before it, so callers can tell which stage a markup change
//! broke without losing the prefix.

use scraper::Html;

use crate::error::ParseError;
use crate::extractors::{scalar, tables};
use crate::record::{ParseOutcome, Site};
use crate::resource;
use crate::selectors;

/// Parses raw response bytes, decoding them with the content-type charset
/// hint before extraction.
///
/// Empty (or whitespace-only) input is the one shape of bytes no document
/// can be made of and is reported as a parse failure.
pub fn parse_bytes(body: &[u8], content_type: Option<&str>) -> ParseOutcome {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ParseOutcome::failed(
            Site::default(),
            ParseError::parse(Some(anyhow::anyhow!("empty document"))),
        );
    }

    let html = resource::decode_body(body, content_type);
    parse_html(&html)
}

/// Parses a UTF-8 HTML document into a [`ParseOutcome`].
pub fn parse_html(html: &str) -> ParseOutcome {
    let doc = Html::parse_document(html);
    extract(&doc)
}

fn extract(doc: &Html) -> ParseOutcome {
    if tables::has_no_data_marker(doc) {
        return ParseOutcome::failed(Site::default(), ParseError::insufficient_data());
    }

    let mut site = Site::default();

    match scalar::uint_field(doc, selectors::GLOBAL_RANK, "global rank") {
        Ok(rank) => site.global_rank = rank,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match scalar::uint_field(doc, selectors::LOCAL_RANK, "local rank") {
        Ok(rank) => site.local_rank = rank,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match scalar::text_field(doc, selectors::COUNTRY, "country") {
        Ok(country) => site.main_country = country,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match scalar::uint_field(doc, selectors::LINKING_TOTAL, "linking total") {
        Ok(total) => site.linking_total = total,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match scalar::text_field(doc, selectors::TITLE, "site title") {
        Ok(title) => site.title = title,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match scalar::text_field(doc, selectors::DESCRIPTION, "site description") {
        Ok(description) => site.description = description,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::visitors(doc) {
        Ok(visitors) => site.visitors = visitors,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::keywords(doc) {
        Ok(keywords) => site.keywords = keywords,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::upstreams(doc) {
        Ok(upstreams) => site.upstreams = upstreams,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::links_from(doc) {
        Ok(links) => site.links_from = links,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::related(doc) {
        Ok(related) => site.related = related,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::categories(doc) {
        Ok(categories) => site.categories = categories,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    match tables::subdomains(doc) {
        Ok(subdomains) => site.subdomains = subdomains,
        Err(err) => return ParseOutcome::failed(site, err),
    }

    ParseOutcome::complete(site)
}
