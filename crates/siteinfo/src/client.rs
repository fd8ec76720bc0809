// ABOUTME: The siteinfo Client owning the HTTP transport and the site-info URL template.
// ABOUTME: site_info() performs one GET and hands the body to the extraction pipeline.

use url::Url;

use crate::error::ParseError;
use crate::options::{ClientBuilder, Options};
use crate::pipeline;
use crate::record::{ParseOutcome, Site};
use crate::resource;
use crate::selectors;

/// URL template for the provider's site-info page; the target domain is
/// appended as the final path segment.
pub const SITE_INFO_URL: &str = "https://www.alexa.com/siteinfo/";

/// Fetches and parses site-info pages.
///
/// One `Client` owns one HTTP transport and can be reused across lookups;
/// each lookup parses its own document tree, so a shared `Client` needs no
/// synchronization.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        selectors::precompile();

        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Fetches and parses the site-info page for `domain`.
    ///
    /// Transport failures and non-success statuses surface as a
    /// [`crate::ErrorCode::Transport`] outcome with a zero record.
    pub async fn site_info(&self, domain: &str) -> ParseOutcome {
        match site_info_url(domain) {
            Ok(url) => self.parse_url(url.as_str()).await,
            Err(err) => ParseOutcome::failed(Site::default(), err),
        }
    }

    /// Fetches and parses an explicit site-info page URL.
    pub async fn parse_url(&self, url: &str) -> ParseOutcome {
        match resource::fetch(&self.http_client, url, &self.opts.headers).await {
            Ok(fetched) => pipeline::parse_bytes(&fetched.body, fetched.content_type.as_deref()),
            Err(err) => ParseOutcome::failed(Site::default(), err),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new(Options::default())
    }
}

/// Builds the site-info URL for a domain.
fn site_info_url(domain: &str) -> Result<Url, ParseError> {
    Url::parse(&format!("{}{}", SITE_INFO_URL, domain))
        .map_err(|e| ParseError::transport(domain, Some(anyhow::anyhow!("invalid URL: {}", e))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_info_url_appends_the_domain() {
        let url = site_info_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://www.alexa.com/siteinfo/example.com");
    }

    #[test]
    fn site_info_url_keeps_subdomains() {
        let url = site_info_url("online.sberbank.ru").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.alexa.com/siteinfo/online.sberbank.ru"
        );
    }
}
