// ABOUTME: Pre-compiled CSS selector cache for repeated document queries.
// ABOUTME: Compiles each selector string once and shares the result process-wide.

//! Selector caching for efficient repeated DOM queries.
//!
//! CSS selector parsing is expensive relative to the actual matching. This
//! module compiles selectors once and reuses them for every document parsed
//! by the process.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

/// Thread-safe cache of compiled CSS selectors.
///
/// Uses a RwLock for read-heavy workloads: most accesses are cache hits
/// (reads), with occasional cache misses requiring writes.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
/// Subsequent calls with the same selector string return the cached result.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    // Fast path: check read lock for cached value
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    // Slow path: compile and cache
    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Double-check after acquiring write lock (another thread may have inserted)
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Precompiles a batch of selectors into the cache.
///
/// Call this during initialization (e.g. when constructing a client) to warm
/// the cache and avoid lock contention during extraction.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap();
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            let compiled = Selector::parse(css).ok();
            cache.insert(css.to_string(), compiled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        let selector = get_or_compile("div.container");
        assert!(selector.is_some());

        // Second call should return cached value
        let selector2 = get_or_compile("div.container");
        assert!(selector2.is_some());
    }

    #[test]
    fn test_invalid_selector_returns_none() {
        let selector = get_or_compile("[[[invalid");
        assert!(selector.is_none());

        // Invalid selectors are also cached (as None)
        let selector2 = get_or_compile("[[[invalid");
        assert!(selector2.is_none());
    }

    #[test]
    fn test_precompile_selectors() {
        let selectors = vec!["h1", "h2", "p.intro", "a[href]"];
        precompile_selectors(selectors);

        // All should be cached
        assert!(get_or_compile("h1").is_some());
        assert!(get_or_compile("h2").is_some());
        assert!(get_or_compile("p.intro").is_some());
        assert!(get_or_compile("a[href]").is_some());
    }
}
