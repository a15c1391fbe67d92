//! YouTube Data API connector implementation
//!
//! Implements the `MusicCatalog` trait for the YouTube Data API v3.

use async_trait::async_trait;
use catalog_traits::error::{CatalogError, Result};
use catalog_traits::http::{HttpClient, HttpRequest};
use catalog_traits::track::TrackDescriptor;
use catalog_traits::MusicCatalog;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::duration::format_duration;
use crate::types::{SearchListResponse, Video, VideoListResponse};

/// YouTube Data API base URL
const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Video category the search is scoped to ("Music")
const MUSIC_CATEGORY_ID: &str = "10";

/// Timeout for API requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// YouTube Data API connector
///
/// Implements `MusicCatalog` by composing two sequential calls:
///
/// 1. `search.list` scoped to the music category, yielding video ids in
///    relevance order
/// 2. `videos.list` batched on those ids, yielding snippet and duration
///    metadata
///
/// The two responses are joined by identifier rather than by position; the
/// upstream does not contractually guarantee order preservation between the
/// calls. Records missing snippet, duration, or thumbnail data are dropped,
/// never emitted partially.
///
/// # Example
///
/// ```ignore
/// use provider_youtube::YouTubeCatalog;
/// use catalog_traits::MusicCatalog;
///
/// let catalog = YouTubeCatalog::new(http_client, api_key);
/// let tracks = catalog.search("lofi beats", 20).await?;
/// ```
pub struct YouTubeCatalog {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// API credential, passed as a request parameter
    api_key: String,
}

impl YouTubeCatalog {
    /// Create a new YouTube catalog connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `api_key` - YouTube Data API key
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: String) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    fn search_url(&self, query: &str, max_results: u32) -> String {
        format!(
            "{}/search?part=snippet&type=video&videoCategoryId={}&maxResults={}&q={}&key={}",
            YOUTUBE_API_BASE,
            MUSIC_CATEGORY_ID,
            max_results,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key)
        )
    }

    fn videos_url(&self, ids: &[String]) -> String {
        format!(
            "{}/videos?part=snippet,contentDetails&id={}&key={}",
            YOUTUBE_API_BASE,
            ids.join(","),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Issue one API call and decode its JSON payload.
    ///
    /// A delivered non-success status becomes `UpstreamRejected`; a body
    /// that does not decode becomes `MalformedResponse`.
    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let request = HttpRequest::get(url)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(CatalogError::UpstreamRejected {
                status: response.status,
                message: response.text(),
            });
        }

        response.json()
    }

    /// Normalize one video resource into a descriptor.
    ///
    /// Returns `None` when any required field is missing; the caller drops
    /// such records instead of emitting them partially.
    fn normalize(video: Video) -> Option<TrackDescriptor> {
        if video.id.is_empty() {
            return None;
        }

        let snippet = video.snippet?;
        let details = video.content_details?;
        let thumbnail = snippet.thumbnails.medium.or(snippet.thumbnails.default)?;

        let channel_title = snippet.channel_title;
        Some(TrackDescriptor {
            id: video.id,
            title: snippet.title,
            artist: channel_title.clone(),
            thumbnail_url: thumbnail.url,
            duration_text: format_duration(&details.duration),
            channel_title,
        })
    }
}

#[async_trait]
impl MusicCatalog for YouTubeCatalog {
    #[instrument(skip(self), fields(query = %query))]
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<TrackDescriptor>> {
        debug!(max_results, "Searching music catalog");

        let search_response: SearchListResponse =
            self.fetch_json(self.search_url(query, max_results)).await?;

        let ids: Vec<String> = search_response
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .filter(|id| !id.is_empty())
            .collect();

        if ids.is_empty() {
            debug!("Search returned no video ids");
            return Ok(Vec::new());
        }

        let details: VideoListResponse = self.fetch_json(self.videos_url(&ids)).await?;

        // Join by identifier, preserving the relevance order of the search
        // call. Removing entries as they match also deduplicates ids.
        let mut by_id: HashMap<String, Video> = details
            .items
            .into_iter()
            .map(|video| (video.id.clone(), video))
            .collect();

        let tracks: Vec<TrackDescriptor> = ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .filter_map(Self::normalize)
            .collect();

        info!(count = tracks.len(), "Catalog search completed");

        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use catalog_traits::http::HttpResponse;
    use mockall::mock;

    mock! {
        Http {}

        #[async_trait]
        impl HttpClient for Http {
            async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
        }
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.as_bytes().to_vec()),
        }
    }

    const SEARCH_BODY: &str = r#"{
        "items": [
            { "id": { "kind": "youtube#video", "videoId": "vid1" } },
            { "id": { "kind": "youtube#video", "videoId": "vid2" } }
        ]
    }"#;

    const DETAILS_BODY: &str = r#"{
        "items": [
            {
                "id": "vid2",
                "snippet": {
                    "title": "Second Song",
                    "channelTitle": "Channel Two",
                    "thumbnails": {
                        "medium": { "url": "https://i.ytimg.com/vi/vid2/mqdefault.jpg" }
                    }
                },
                "contentDetails": { "duration": "PT1H2M3S" }
            },
            {
                "id": "vid1",
                "snippet": {
                    "title": "First Song",
                    "channelTitle": "Channel One",
                    "thumbnails": {
                        "default": { "url": "https://i.ytimg.com/vi/vid1/default.jpg" }
                    }
                },
                "contentDetails": { "duration": "PT3M45S" }
            }
        ]
    }"#;

    fn mock_two_stage(search_body: &'static str, details_body: &'static str) -> MockHttp {
        let mut http = MockHttp::new();
        http.expect_execute().times(2).returning(move |request| {
            if request.url.contains("/search?") {
                Ok(ok_response(search_body))
            } else {
                Ok(ok_response(details_body))
            }
        });
        http
    }

    #[tokio::test]
    async fn test_search_normalizes_and_preserves_relevance_order() {
        let http = mock_two_stage(SEARCH_BODY, DETAILS_BODY);
        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());

        let tracks = catalog.search("test query", 20).await.unwrap();

        // Details came back in reverse order; the result must follow the
        // search order.
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id, "vid1");
        assert_eq!(tracks[0].title, "First Song");
        assert_eq!(tracks[0].artist, "Channel One");
        assert_eq!(tracks[0].channel_title, "Channel One");
        assert_eq!(tracks[0].duration_text, "3:45");
        assert_eq!(
            tracks[0].thumbnail_url,
            "https://i.ytimg.com/vi/vid1/default.jpg"
        );
        assert_eq!(tracks[1].id, "vid2");
        assert_eq!(tracks[1].duration_text, "1:02:03");
    }

    #[tokio::test]
    async fn test_search_request_composition() {
        let mut http = MockHttp::new();
        http.expect_execute().times(2).returning(|request| {
            if request.url.contains("/search?") {
                assert!(request.url.contains("videoCategoryId=10"));
                assert!(request.url.contains("maxResults=15"));
                assert!(request.url.contains("q=lofi%20beats"));
                assert!(request.url.contains("key=test-key"));
                Ok(ok_response(SEARCH_BODY))
            } else {
                assert!(request.url.contains("part=snippet,contentDetails"));
                assert!(request.url.contains("id=vid1,vid2"));
                assert!(request.url.contains("key=test-key"));
                Ok(ok_response(DETAILS_BODY))
            }
        });

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let tracks = catalog.search("lofi beats", 15).await.unwrap();
        assert_eq!(tracks.len(), 2);
    }

    #[tokio::test]
    async fn test_search_with_no_results_skips_details_call() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| Ok(ok_response(r#"{ "items": [] }"#)));

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let tracks = catalog.search("nothing matches this", 20).await.unwrap();

        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_records_are_dropped() {
        let details = r#"{
            "items": [
                {
                    "id": "vid1",
                    "snippet": {
                        "title": "First Song",
                        "channelTitle": "Channel One",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/vi/vid1/mqdefault.jpg" }
                        }
                    },
                    "contentDetails": { "duration": "PT3M45S" }
                },
                { "id": "vid2", "snippet": { "title": "No Details", "channelTitle": "C" } }
            ]
        }"#;

        let http = mock_two_stage(SEARCH_BODY, details);
        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());

        let tracks = catalog.search("test", 20).await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "vid1");
    }

    #[tokio::test]
    async fn test_record_without_thumbnail_is_dropped() {
        let details = r#"{
            "items": [
                {
                    "id": "vid1",
                    "snippet": { "title": "No Thumb", "channelTitle": "C", "thumbnails": {} },
                    "contentDetails": { "duration": "PT3M45S" }
                }
            ]
        }"#;

        let http = mock_two_stage(SEARCH_BODY, details);
        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());

        let tracks = catalog.search("test", 20).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_rejected() {
        let mut http = MockHttp::new();
        http.expect_execute().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 403,
                headers: HashMap::new(),
                body: Bytes::from("quota exceeded"),
            })
        });

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let result = catalog.search("test", 20).await;

        match result {
            Err(CatalogError::UpstreamRejected { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected UpstreamRejected, got {:?}", other.map(|t| t.len())),
        }
    }

    #[tokio::test]
    async fn test_malformed_payload_is_malformed_response() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .times(1)
            .returning(|_| Ok(ok_response("this is not json")));

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let result = catalog.search("test", 20).await;

        assert!(matches!(result, Err(CatalogError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_at_details_stage_propagates() {
        let mut http = MockHttp::new();
        http.expect_execute().times(2).returning(|request| {
            if request.url.contains("/search?") {
                Ok(ok_response(SEARCH_BODY))
            } else {
                Err(CatalogError::Transport("connection reset".to_string()))
            }
        });

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let result = catalog.search("test", 20).await;

        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }

    #[tokio::test]
    async fn test_empty_video_ids_are_never_emitted() {
        let search = r#"{
            "items": [
                { "id": { "videoId": "vid1" } },
                { "id": { "videoId": "" } },
                { "id": { "kind": "youtube#channel" } }
            ]
        }"#;
        let details = r#"{
            "items": [
                {
                    "id": "vid1",
                    "snippet": {
                        "title": "First Song",
                        "channelTitle": "Channel One",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/vi/vid1/mqdefault.jpg" }
                        }
                    },
                    "contentDetails": { "duration": "PT3M45S" }
                },
                {
                    "id": "",
                    "snippet": {
                        "title": "Anonymous",
                        "channelTitle": "Channel None",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/vi//mqdefault.jpg" }
                        }
                    },
                    "contentDetails": { "duration": "PT1M" }
                }
            ]
        }"#;

        let mut http = MockHttp::new();
        http.expect_execute().times(2).returning(move |request| {
            if request.url.contains("/search?") {
                Ok(ok_response(search))
            } else {
                // Empty ids must not reach the details call.
                assert!(request.url.contains("id=vid1&"));
                Ok(ok_response(details))
            }
        });

        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());
        let tracks = catalog.search("test", 20).await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "vid1");
        assert!(tracks.iter().all(|track| !track.id.is_empty()));
    }

    #[test]
    fn test_normalize_rejects_empty_id() {
        let video: Video = serde_json::from_str(
            r#"{
                "id": "",
                "snippet": {
                    "title": "Anonymous",
                    "channelTitle": "Channel None",
                    "thumbnails": {
                        "medium": { "url": "https://i.ytimg.com/vi//mqdefault.jpg" }
                    }
                },
                "contentDetails": { "duration": "PT1M" }
            }"#,
        )
        .unwrap();

        assert!(YouTubeCatalog::normalize(video).is_none());
    }

    #[tokio::test]
    async fn test_empty_id_in_details_is_dropped() {
        let details = r#"{
            "items": [
                {
                    "id": "",
                    "snippet": {
                        "title": "Anonymous",
                        "channelTitle": "Channel None",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/vi//mqdefault.jpg" }
                        }
                    },
                    "contentDetails": { "duration": "PT1M" }
                }
            ]
        }"#;

        let http = mock_two_stage(SEARCH_BODY, details);
        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());

        let tracks = catalog.search("test", 20).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_emitted_once() {
        let search = r#"{
            "items": [
                { "id": { "videoId": "vid1" } },
                { "id": { "videoId": "vid1" } }
            ]
        }"#;
        let details = r#"{
            "items": [
                {
                    "id": "vid1",
                    "snippet": {
                        "title": "First Song",
                        "channelTitle": "Channel One",
                        "thumbnails": {
                            "medium": { "url": "https://i.ytimg.com/vi/vid1/mqdefault.jpg" }
                        }
                    },
                    "contentDetails": { "duration": "PT3M45S" }
                }
            ]
        }"#;

        let http = mock_two_stage(search, details);
        let catalog = YouTubeCatalog::new(Arc::new(http), "test-key".to_string());

        let tracks = catalog.search("test", 20).await.unwrap();
        assert_eq!(tracks.len(), 1);
    }
}
