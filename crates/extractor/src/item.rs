// ABOUTME: ItemRecord and Listing, the records produced by one extraction of a marketplace page.
// ABOUTME: Serializes with the wire names of the JSON endpoint (name, price, img, link).

use serde::{Deserialize, Serialize};

/// One marketplace card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemRecord {
    pub name: String,
    pub price: String,
    #[serde(rename = "img")]
    pub image_url: String,
    /// Always absolute.
    #[serde(rename = "link")]
    pub link_url: String,
}

/// The outcome of extracting one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Listing {
    pub items: Vec<ItemRecord>,
    /// False when the container selector matched nothing, which usually means
    /// the upstream markup changed rather than the marketplace being empty.
    pub container_found: bool,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when nothing matched the container selector at all.
    pub fn is_schema_drift(&self) -> bool {
        !self.container_found
    }

    pub fn into_items(self) -> Vec<ItemRecord> {
        self.items
    }
}
