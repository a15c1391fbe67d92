//! # Catalog Traits
//!
//! Shared contracts between the catalog service facade, the concrete
//! catalog providers, and the host HTTP implementations.
//!
//! ## Overview
//!
//! This crate defines the seams of the catalog core:
//!
//! - [`HttpClient`](http::HttpClient) — async HTTP operations, implemented
//!   by `bridge-reqwest` for native hosts and mockable in tests
//! - [`MusicCatalog`](catalog::MusicCatalog) — a searchable remote catalog,
//!   implemented by `provider-youtube`
//! - [`TrackDescriptor`](track::TrackDescriptor) — the normalized record
//!   flowing out of every search
//! - [`CatalogError`](error::CatalogError) — the transport / upstream /
//!   malformed-response failure taxonomy
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so searches can run concurrently across
//! async tasks. Implementations must hold no mutable shared state.

pub mod catalog;
pub mod error;
pub mod http;
pub mod track;

pub use error::{CatalogError, Result};

// Re-export commonly used types
pub use catalog::MusicCatalog;
pub use http::{HttpClient, HttpRequest, HttpResponse, RetryPolicy};
pub use track::TrackDescriptor;
