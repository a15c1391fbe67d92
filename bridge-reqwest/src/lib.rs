//! # Reqwest HTTP Bridge
//!
//! Native [`HttpClient`](catalog_traits::http::HttpClient) implementation
//! backed by reqwest, with connection pooling, request timeouts, and retry
//! with exponential backoff.

mod http;

pub use http::ReqwestHttpClient;
