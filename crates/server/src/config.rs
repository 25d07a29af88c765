// ABOUTME: Server configuration read from command-line flags with environment variable fallbacks.
// ABOUTME: Builds the extractor Client from the configured source, origin and timeout.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use mirror_extractor::{Client, ScrapeError, DEFAULT_MARKETPLACE_URL, DEFAULT_ORIGIN};

/// How `GET /` presents the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// Fetch upstream and render the cards on the server.
    #[default]
    Server,
    /// Serve a static shell that renders `/api/items` in the browser.
    Spa,
}

/// Mirror marketplace listings as JSON and HTML.
#[derive(Parser, Debug, Clone)]
#[command(name = "mirror-server")]
#[command(about = "Serve a marketplace listing as JSON and a storefront page")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MIRROR_BIND", default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// Marketplace page to scrape on every request
    #[arg(long, env = "MIRROR_SOURCE_URL", default_value = DEFAULT_MARKETPLACE_URL)]
    pub source_url: String,

    /// Scheme and host prepended to relative item links
    #[arg(long, env = "MIRROR_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Upstream request timeout in seconds
    #[arg(
        long,
        env = "MIRROR_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Presentation of the index page
    #[arg(long, env = "MIRROR_MODE", value_enum, default_value = "server")]
    pub mode: RenderMode,
}

impl ServerConfig {
    /// Build the upstream client described by this configuration.
    pub fn build_client(&self) -> Result<Client, ScrapeError> {
        Client::builder()
            .origin(self.origin.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }
}
