//! Catalog Service Facade
//!
//! Wraps a [`MusicCatalog`] backend with the mood table and the boundary
//! failure policy: the plain operations render every typed failure as an
//! empty result set after logging it, while the `try_` variants preserve
//! the error taxonomy for callers that want it.

use std::sync::Arc;

use catalog_traits::error::Result;
use catalog_traits::{MusicCatalog, TrackDescriptor};
use tracing::warn;

use crate::moods::query_for_mood;

/// Default result cap for free-text searches.
pub const DEFAULT_SEARCH_RESULTS: u32 = 20;

/// Default result cap for mood playlist queries.
pub const MOOD_PLAYLIST_RESULTS: u32 = 15;

/// Result cap for the trending shelf.
pub const TRENDING_RESULTS: u32 = 12;

const TRENDING_QUERY: &str = "trending music 2024";

/// Stateless facade over a searchable music catalog.
///
/// Holds no mutable state and no cache; each call opens its own independent
/// network operations, so independent calls are safe to run concurrently.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn MusicCatalog>,
}

impl CatalogService {
    /// Create a service over the given catalog backend.
    pub fn new(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self { catalog }
    }

    /// Search with a free-text query, preserving the error taxonomy.
    pub async fn try_search_by_text(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<TrackDescriptor>> {
        self.catalog.search(query, max_results).await
    }

    /// Search with a free-text query.
    ///
    /// Any failure is logged and rendered as an empty sequence; callers of
    /// this operation cannot distinguish "no matches" from "request failed".
    pub async fn search_by_text(&self, query: &str, max_results: u32) -> Vec<TrackDescriptor> {
        collapse(self.try_search_by_text(query, max_results).await, query)
    }

    /// Search with a mood key, preserving the error taxonomy.
    ///
    /// Unknown moods resolve to the default query rather than failing.
    pub async fn try_search_by_mood(
        &self,
        mood: &str,
        max_results: u32,
    ) -> Result<Vec<TrackDescriptor>> {
        self.try_search_by_text(query_for_mood(mood), max_results)
            .await
    }

    /// Search with a mood key, collapsing failures to an empty sequence.
    pub async fn search_by_mood(&self, mood: &str, max_results: u32) -> Vec<TrackDescriptor> {
        let query = query_for_mood(mood);
        collapse(self.try_search_by_text(query, max_results).await, query)
    }

    /// Fetch the trending shelf.
    pub async fn trending(&self) -> Vec<TrackDescriptor> {
        self.search_by_text(TRENDING_QUERY, TRENDING_RESULTS).await
    }
}

/// The single place where typed failures become the empty-result rendering.
fn collapse(result: Result<Vec<TrackDescriptor>>, query: &str) -> Vec<TrackDescriptor> {
    match result {
        Ok(tracks) => tracks,
        Err(error) => {
            warn!(%error, query, "Catalog search failed; rendering empty result");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_traits::CatalogError;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Catalog {}

        #[async_trait]
        impl MusicCatalog for Catalog {
            async fn search(&self, query: &str, max_results: u32) -> Result<Vec<TrackDescriptor>>;
        }
    }

    fn track(id: &str) -> TrackDescriptor {
        TrackDescriptor {
            id: id.to_string(),
            title: format!("Title {}", id),
            artist: "Channel".to_string(),
            thumbnail_url: format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", id),
            duration_text: "3:45".to_string(),
            channel_title: "Channel".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_by_text_passes_through_results() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .with(eq("lofi beats"), eq(20))
            .times(1)
            .returning(|_, _| Ok(vec![track("vid1")]));

        let service = CatalogService::new(Arc::new(catalog));
        let tracks = service.search_by_text("lofi beats", 20).await;

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "vid1");
    }

    #[tokio::test]
    async fn test_search_by_text_collapses_failures_to_empty() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .times(1)
            .returning(|_, _| Err(CatalogError::Transport("connection reset".to_string())));

        let service = CatalogService::new(Arc::new(catalog));
        let tracks = service.search_by_text("anything", 20).await;

        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_try_search_preserves_error_kind() {
        let mut catalog = MockCatalog::new();
        catalog.expect_search().times(1).returning(|_, _| {
            Err(CatalogError::UpstreamRejected {
                status: 403,
                message: "quota exceeded".to_string(),
            })
        });

        let service = CatalogService::new(Arc::new(catalog));
        let result = service.try_search_by_text("anything", 20).await;

        assert!(matches!(
            result,
            Err(CatalogError::UpstreamRejected { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_by_mood_issues_table_query() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .with(eq("relaxing calm music peaceful"), eq(15))
            .times(1)
            .returning(|_, _| Ok(vec![track("vid1")]));

        let service = CatalogService::new(Arc::new(catalog));
        let tracks = service.search_by_mood("calm", 15).await;

        assert_eq!(tracks.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_mood_issues_default_query() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .with(eq("popular music"), eq(15))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = CatalogService::new(Arc::new(catalog));
        let tracks = service.search_by_mood("no-such-mood", 15).await;

        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_trending_issues_canned_query() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .with(eq("trending music 2024"), eq(TRENDING_RESULTS))
            .times(1)
            .returning(|_, _| Ok(vec![track("vid1")]));

        let service = CatalogService::new(Arc::new(catalog));
        let tracks = service.trending().await;

        assert_eq!(tracks.len(), 1);
    }
}
