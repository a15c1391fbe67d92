//! # YouTube Catalog Provider
//!
//! Implements the [`MusicCatalog`](catalog_traits::MusicCatalog) trait
//! against the YouTube Data API v3.
//!
//! ## Overview
//!
//! This crate provides:
//! - Music-category search composed with a batched details lookup
//! - Normalization of API payloads into display-ready track descriptors
//! - ISO 8601 duration codes rendered as `M:SS` / `H:MM:SS`
//! - Deterministic embed and thumbnail URL construction

pub mod connector;
pub mod duration;
pub mod links;
pub mod types;

pub use connector::YouTubeCatalog;
pub use duration::format_duration;
pub use links::{embed_url, thumbnail_url};
