// ABOUTME: Configuration options for the marketplace client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::error::ScrapeError;
use crate::extractors::config::ExtractorConfig;

/// User-Agent sent upstream unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Configuration options for the marketplace client.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
    pub extractor: ExtractorConfig,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            headers: HashMap::new(),
            extractor: ExtractorConfig::default(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and User-Agent settings are then the
    /// caller's responsibility.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the selector configuration.
    pub fn extractor(mut self, config: ExtractorConfig) -> Self {
        self.opts.extractor = config;
        self
    }

    /// Set the origin used to absolutize item links.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.opts.extractor.origin = origin.into();
        self
    }

    /// Build the Client with the configured options.
    ///
    /// Fails with a parse error if a selector does not compile, or a fetch
    /// error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client, ScrapeError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
