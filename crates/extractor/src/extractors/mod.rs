// ABOUTME: Extraction of marketplace item cards from HTML.
// ABOUTME: Groups the selector configuration, the card walker and link normalization.

//! Item extraction module.
//!
//! Submodules:
//! - `config`: selector configuration and its compiled form.
//! - `items`: the card walker producing [`crate::item::ItemRecord`]s.
//! - `links`: href absolutization against the marketplace origin.

pub mod config;
pub mod items;
pub mod links;
