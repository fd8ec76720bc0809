// ABOUTME: The frozen selector table locating every site-info field in the provider's markup.
// ABOUTME: Pure configuration; markup drift on the provider's side lands here first.

//! Field-to-selector table for the provider's site-info page.
//!
//! One CSS selector per logical field. Scalar selectors locate the node
//! whose text is the field value; tabular selectors locate the row
//! container, with the per-row column mappings in
//! [`crate::extractors::tables`].

pub const GLOBAL_RANK: &str = "span.globleRank span div strong";
pub const LOCAL_RANK: &str = "span.countryRank span div strong";
pub const COUNTRY: &str = "span.countryRank span h4 a";
pub const VISITORS: &str = "table#demographics_div_country_table tbody";
pub const KEYWORDS: &str = "table#keywords_top_keywords_table tbody";
pub const UPSTREAMS: &str = "table#keywords_upstream_site_table tbody";
pub const LINKS_FROM: &str = "table#linksin_table tbody";
pub const LINKING_TOTAL: &str = "section#linksin-panel-content div span div span.font-4.box1-r";
pub const RELATED: &str = "table#audience_overlap_table tbody";
pub const CATEGORIES: &str = "table#category_link_table tbody";
pub const SUBDOMAINS: &str = "table#subdomain_table tbody";
pub const TITLE: &str = "div.row-fluid.siteinfo-site-summary span div p";
pub const DESCRIPTION: &str = "section#contact-panel-content div.row-fluid span.span8 p.color-s3";
pub const NO_DATA: &str = "section#no-enough-data";

/// Every selector in the table, for cache warming.
pub const ALL: &[&str] = &[
    GLOBAL_RANK,
    LOCAL_RANK,
    COUNTRY,
    VISITORS,
    KEYWORDS,
    UPSTREAMS,
    LINKS_FROM,
    LINKING_TOTAL,
    RELATED,
    CATEGORIES,
    SUBDOMAINS,
    TITLE,
    DESCRIPTION,
    NO_DATA,
];

/// Precompiles the whole table into the selector cache.
pub fn precompile() {
    crate::extractors::compiled::precompile_selectors(ALL.iter().copied());
}
