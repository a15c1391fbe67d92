//! Music Catalog Abstraction
//!
//! Contract between the service facade and a concrete catalog backend.

use async_trait::async_trait;

use crate::error::Result;
use crate::track::TrackDescriptor;

/// A searchable remote music catalog.
///
/// Implementations translate a free-text query into an ordered sequence of
/// fully-populated [`TrackDescriptor`]s, preserving the catalog's own
/// relevance order. Implementations must be stateless between calls so that
/// independent searches can run concurrently.
///
/// # Errors
///
/// All failure kinds are surfaced as typed [`CatalogError`](crate::CatalogError)
/// values. Collapsing them into an empty result set is a policy decision that
/// belongs to the caller, not to the catalog.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Search the catalog, returning at most `max_results` tracks.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<TrackDescriptor>>;
}
