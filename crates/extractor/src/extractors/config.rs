// ABOUTME: Selector configuration for marketplace item cards and its compiled form.
// ABOUTME: ExtractorConfig is plain data; CompiledSelectors parses every selector once up front.

//! Extractor configuration.
//!
//! The marketplace layout is described entirely by [`ExtractorConfig`]: the
//! container that holds the card grid, the anchor that wraps each card, and
//! the per-field selectors evaluated relative to that anchor. Compiling the
//! config into [`CompiledSelectors`] is the only step that can fail; once
//! compiled, extraction itself never errors.

use anyhow::anyhow;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ScrapeError;

/// Scheme and host of the marketplace.
pub const DEFAULT_ORIGIN: &str = "https://kubeo.net";

/// Listing page fetched when no source URL is configured.
pub const DEFAULT_MARKETPLACE_URL: &str = "https://kubeo.net/#/marketplace";

/// Placeholder name for cards whose name element is missing or blank.
pub const DEFAULT_NAME: &str = "Unknown Item";

/// Placeholder price for cards without a price element.
pub const DEFAULT_PRICE: &str = "Free";

/// Icon class rendered next to every price on the marketplace.
pub const DEFAULT_PRICE_MARKER: &str = "ph-currency-circle-dollar";

/// Describes where each field of an item card lives in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Scheme and host prepended to relative links.
    pub origin: String,
    /// The grid element(s) holding the cards.
    pub container: String,
    /// One anchor per card, matched anywhere inside a container.
    pub anchor: String,
    /// Name element, relative to the anchor.
    pub name: String,
    /// Price candidates, relative to the anchor. The first candidate carrying
    /// `price_marker` wins.
    pub price: String,
    pub price_marker: String,
    /// Thumbnail selectors tried in order; the `src` of the first hit is used.
    pub image: Vec<String>,
    pub default_name: String,
    pub default_price: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            container: "div.grid".to_string(),
            anchor: "a".to_string(),
            name: "p.truncate".to_string(),
            price: "p".to_string(),
            price_marker: DEFAULT_PRICE_MARKER.to_string(),
            image: vec!["img[src*='items']".to_string(), "img".to_string()],
            default_name: DEFAULT_NAME.to_string(),
            default_price: DEFAULT_PRICE.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Replace the origin. A trailing slash is tolerated.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Compile every selector in this config.
    ///
    /// Also rejects an origin that is not an absolute http(s) URL, since
    /// every link is built on top of it.
    pub fn compile(&self) -> Result<CompiledSelectors, ScrapeError> {
        validate_origin(self.trimmed_origin())?;

        if self.image.is_empty() {
            return Err(ScrapeError::parse(
                "CompileSelectors",
                Some(anyhow!("at least one image selector is required")),
            ));
        }

        // The marker doubles as a class fragment for the price icon.
        let price_icon = format!("[class*=\"{}\"]", self.price_marker);

        Ok(CompiledSelectors {
            container: compile(&self.container)?,
            anchor: compile(&self.anchor)?,
            name: compile(&self.name)?,
            price: compile(&self.price)?,
            price_icon: compile(&price_icon)?,
            image: self
                .image
                .iter()
                .map(|css| compile(css))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// The origin without a trailing slash.
    pub(crate) fn trimmed_origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }
}

/// Selectors from an [`ExtractorConfig`], parsed once.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub container: Selector,
    pub anchor: Selector,
    pub name: Selector,
    pub price: Selector,
    pub price_icon: Selector,
    pub image: Vec<Selector>,
}

fn validate_origin(origin: &str) -> Result<(), ScrapeError> {
    let invalid = |reason: String| {
        ScrapeError::parse(
            "CompileSelectors",
            Some(anyhow!("invalid origin {:?}: {}", origin, reason)),
        )
    };

    let parsed = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    if !parsed.has_host() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

fn compile(css: &str) -> Result<Selector, ScrapeError> {
    if css.trim().is_empty() {
        return Err(ScrapeError::parse(
            "CompileSelectors",
            Some(anyhow!("empty selector")),
        ));
    }
    Selector::parse(css).map_err(|e| {
        ScrapeError::parse(
            "CompileSelectors",
            Some(anyhow!("invalid selector {:?}: {}", css, e)),
        )
    })
}
