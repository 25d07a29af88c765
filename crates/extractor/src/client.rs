// ABOUTME: The main Client struct that fetches the marketplace page and extracts item cards.
// ABOUTME: Provides async fetch_listing()/fetch_items() and a synchronous extract_html() for local HTML.

use tracing::{debug, warn};

use crate::error::ScrapeError;
use crate::extractors::items::ItemExtractor;
use crate::item::{ItemRecord, Listing};
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};

const DRIFT_WARNING: &str = "container selector matched nothing; upstream markup may have changed";

/// Fetches marketplace pages and turns them into item records.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections across calls.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
    extractor: ItemExtractor,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let extractor = ItemExtractor::new(opts.extractor.clone())?;

        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| {
                    ScrapeError::fetch(
                        "",
                        "BuildClient",
                        Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
                    )
                })?,
        };

        Ok(Self {
            opts,
            http_client,
            extractor,
        })
    }

    pub fn extractor(&self) -> &ItemExtractor {
        &self.extractor
    }

    /// Fetch the page at `url` and extract its item cards.
    ///
    /// Any transport failure or non-200 status aborts with a fetch error; no
    /// partial results are returned.
    pub async fn fetch_listing(&self, url: &str) -> Result<Listing, ScrapeError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };

        let fetch_result = fetch(&self.http_client, url, &fetch_opts).await?;
        let html = fetch_result.text();

        let listing = self.extractor.extract(&html);
        if listing.is_schema_drift() {
            warn!(
                url,
                final_url = %fetch_result.final_url,
                container = %self.extractor.config().container,
                "{}",
                DRIFT_WARNING
            );
        }
        debug!(url, items = listing.len(), "listing extracted");
        Ok(listing)
    }

    /// Fetch `url` and return only the records.
    pub async fn fetch_items(&self, url: &str) -> Result<Vec<ItemRecord>, ScrapeError> {
        self.fetch_listing(url).await.map(Listing::into_items)
    }

    /// Extract item cards from an HTML string without touching the network.
    pub fn extract_html(&self, html: &str) -> Listing {
        let listing = self.extractor.extract(html);
        if listing.is_schema_drift() {
            warn!(
                container = %self.extractor.config().container,
                "{}",
                DRIFT_WARNING
            );
        }
        listing
    }
}
