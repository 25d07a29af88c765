// ABOUTME: Library entry point for the mirror server, exposing the router for tests and main.
// ABOUTME: Re-exports build_app, AppState, ServerConfig and RenderMode.

//! HTTP front end for the marketplace mirror.
//!
//! Every request scrapes the configured marketplace page afresh and serves
//! the records either as JSON (`/api/items`) or as a storefront page (`/`).

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::{RenderMode, ServerConfig};
