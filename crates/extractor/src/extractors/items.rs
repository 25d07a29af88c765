// ABOUTME: Item card extraction: walks the anchors inside the grid container and builds ItemRecords.
// ABOUTME: Applies placeholder name/price, picks the marked price element and absolutizes links.

//! Item card extraction.
//!
//! Key behaviors:
//! - Anchors are visited in document order, each once, and only when they sit
//!   inside an element matching the container selector.
//! - Text is whitespace-normalized; blank text counts as missing.
//! - Missing name or price falls back to the configured placeholder.
//! - A missing container is reported through [`Listing::container_found`],
//!   never as an error.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::extractors::config::{CompiledSelectors, ExtractorConfig};
use crate::extractors::links::normalize_link;
use crate::item::{ItemRecord, Listing};

/// Collapses runs of whitespace (including newlines and tabs) into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(el: &ElementRef) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Turns marketplace HTML into item records using a compiled [`ExtractorConfig`].
#[derive(Debug, Clone)]
pub struct ItemExtractor {
    config: ExtractorConfig,
    selectors: CompiledSelectors,
}

impl ItemExtractor {
    /// Compile `config` into an extractor.
    pub fn new(config: ExtractorConfig) -> Result<Self, ScrapeError> {
        let selectors = config.compile()?;
        Ok(Self { config, selectors })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse `html` and extract every item card.
    ///
    /// Parsing is tolerant; malformed markup yields whatever the parser
    /// recovers, possibly nothing.
    pub fn extract(&self, html: &str) -> Listing {
        let doc = Html::parse_document(html);
        self.extract_document(&doc)
    }

    /// Extract item cards from an already parsed document.
    pub fn extract_document(&self, doc: &Html) -> Listing {
        let container_found = doc.select(&self.selectors.container).next().is_some();
        if !container_found {
            return Listing {
                items: Vec::new(),
                container_found,
            };
        }

        let items: Vec<ItemRecord> = doc
            .select(&self.selectors.anchor)
            .filter(|anchor| self.inside_container(anchor))
            .map(|anchor| self.extract_item(&anchor))
            .collect();

        debug!(count = items.len(), "extracted item cards");

        Listing {
            items,
            container_found,
        }
    }

    fn inside_container(&self, anchor: &ElementRef) -> bool {
        anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| self.selectors.container.matches(&el))
    }

    fn extract_item(&self, anchor: &ElementRef) -> ItemRecord {
        let name = anchor
            .select(&self.selectors.name)
            .next()
            .map(|el| element_text(&el))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.config.default_name.clone());

        let price = self
            .extract_price(anchor)
            .unwrap_or_else(|| self.config.default_price.clone());

        let image_url = first_src(anchor, &self.selectors.image).unwrap_or_default();

        let href = anchor.value().attr("href").unwrap_or("");
        let link_url = normalize_link(href, self.config.trimmed_origin());

        ItemRecord {
            name,
            price,
            image_url,
            link_url,
        }
    }

    /// Text of the first price candidate carrying the currency marker, either
    /// literally in its text or as an icon class on it or a descendant.
    fn extract_price(&self, anchor: &ElementRef) -> Option<String> {
        let marker = self.config.price_marker.as_str();
        let candidate = anchor.select(&self.selectors.price).find(|el| {
            el.text().any(|t| t.contains(marker))
                || self.selectors.price_icon.matches(el)
                || el.select(&self.selectors.price_icon).next().is_some()
        })?;

        let raw = candidate.text().collect::<String>().replace(marker, "");
        let price = normalize_whitespace(&raw);
        if price.is_empty() {
            None
        } else {
            Some(price)
        }
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default()).expect("default selectors must compile")
    }
}

/// `src` of the first element hit by `selectors`, tried in order.
fn first_src(anchor: &ElementRef, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|sel| {
        anchor
            .select(sel)
            .filter_map(|el| el.value().attr("src"))
            .map(str::trim)
            .find(|src| !src.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD_HTML: &str = r#"
        <html><body>
        <div class="grid gap-4">
            <a href="/#/item/136">
                <img src="https://kubeo.net/items/136.png" alt="">
                <p class="truncate">  Golden
                    Crown </p>
                <p class="flex"><i class="ph ph-currency-circle-dollar"></i>
                    1,250
                </p>
            </a>
            <a href="https://kubeo.net/#/item/7">
                <img src="/static/placeholder.png">
                <p class="truncate"></p>
                <p class="flex">Limited</p>
            </a>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_fields_from_cards() {
        let listing = ItemExtractor::default().extract(CARD_HTML);
        assert!(listing.container_found);
        assert_eq!(
            listing.items,
            vec![
                ItemRecord {
                    name: "Golden Crown".to_string(),
                    price: "1,250".to_string(),
                    image_url: "https://kubeo.net/items/136.png".to_string(),
                    link_url: "https://kubeo.net/#/item/136".to_string(),
                },
                ItemRecord {
                    name: "Unknown Item".to_string(),
                    price: "Free".to_string(),
                    image_url: "/static/placeholder.png".to_string(),
                    link_url: "https://kubeo.net/#/item/7".to_string(),
                },
            ]
        );
    }

    #[test]
    fn price_marker_in_text_is_stripped() {
        let html = r#"<div class="grid"><a href="/item/1">
            <p>Owner: bob</p>
            <p>ph-currency-circle-dollar	40
            </p></a></div>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.items[0].price, "40");
    }

    #[test]
    fn blank_price_text_falls_back_to_placeholder() {
        let html = r#"<div class="grid"><a href="/item/1">
            <p><i class="ph-currency-circle-dollar"></i>   </p></a></div>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.items[0].price, "Free");
    }

    #[test]
    fn item_image_preferred_over_other_images() {
        let html = r#"<div class="grid"><a href="/item/1">
            <img src="/avatars/seller.png">
            <img src="/items/1.png"></a></div>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.items[0].image_url, "/items/1.png");
    }

    #[test]
    fn missing_image_is_empty() {
        let html = r#"<div class="grid"><a href="/item/1"><p class="truncate">X</p></a></div>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.items[0].image_url, "");
    }

    #[test]
    fn anchors_outside_container_are_ignored() {
        let html = r#"
            <nav><a href="/home">Home</a></nav>
            <div class="grid"><a href="/item/1"></a></div>
            <footer><a href="/terms">Terms</a></footer>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.items[0].link_url, "https://kubeo.net/item/1");
    }

    #[test]
    fn nested_containers_do_not_duplicate_anchors() {
        let html = r#"<div class="grid"><div class="grid">
            <a href="/item/1"></a><a href="/item/2"></a>
            </div></div>"#;
        let listing = ItemExtractor::default().extract(html);
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn missing_container_reports_drift() {
        let listing = ItemExtractor::default().extract("<div><a href='/x'>x</a>");
        assert!(listing.is_empty());
        assert!(listing.is_schema_drift());
    }

    #[test]
    fn empty_container_is_not_drift() {
        let listing = ItemExtractor::default().extract(r#"<div class="grid"></div>"#);
        assert!(listing.is_empty());
        assert!(!listing.is_schema_drift());
    }

    #[test]
    fn custom_config_is_honored() {
        let cfg = ExtractorConfig {
            origin: "https://shop.test/".to_string(),
            container: "ul.products".to_string(),
            anchor: "li > a".to_string(),
            name: "h3".to_string(),
            price: "span".to_string(),
            price_marker: "$".to_string(),
            default_name: "?".to_string(),
            ..Default::default()
        };
        let html = r#"<ul class="products">
            <li><a href="p/1"><h3>Mug</h3><span>$ 9</span></a></li>
            <li><a href="p/2"><span>sale</span></a></li></ul>"#;
        let listing = ItemExtractor::new(cfg).unwrap().extract(html);
        assert_eq!(listing.items[0].name, "Mug");
        assert_eq!(listing.items[0].price, "9");
        assert_eq!(listing.items[0].link_url, "https://shop.test/p/1");
        assert_eq!(listing.items[1].name, "?");
        assert_eq!(listing.items[1].price, "Free");
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace(""), "");
    }
}
