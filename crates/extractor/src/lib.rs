// ABOUTME: Main library entry point for the marketplace mirror extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ItemRecord, Listing, ScrapeError, ExtractorConfig.

//! Fetch a marketplace listing page and turn its item cards into records.
//!
//! The page is fetched once per call, parsed with CSS selectors and returned
//! as an ordered list of [`ItemRecord`]s. Nothing is cached.
//!
//! # Example
//!
//! ```no_run
//! use mirror_extractor::{Client, ScrapeError, DEFAULT_MARKETPLACE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build()?;
//!     for item in client.fetch_items(DEFAULT_MARKETPLACE_URL).await? {
//!         println!("{} - {}", item.name, item.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod item;
pub mod options;
pub mod render;
pub mod resource;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::config::{
    ExtractorConfig, DEFAULT_MARKETPLACE_URL, DEFAULT_NAME, DEFAULT_ORIGIN, DEFAULT_PRICE,
};
pub use crate::extractors::items::ItemExtractor;
pub use crate::extractors::links::normalize_link;
pub use crate::item::{ItemRecord, Listing};
pub use crate::options::{ClientBuilder, Options};
