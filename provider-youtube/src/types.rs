//! YouTube Data API response types
//!
//! Data structures for deserializing YouTube Data API v3 responses. Fields
//! the normalizer requires are kept optional here; incompleteness is decided
//! per record during normalization, not by failing the whole payload.

use serde::Deserialize;

/// `search.list` response
///
/// See: https://developers.google.com/youtube/v3/docs/search/list
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    /// Search results in relevance order
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// One `search.list` result
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

/// Polymorphic result identifier; only video results carry a `videoId`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// `videos.list` response
///
/// See: https://developers.google.com/youtube/v3/docs/videos/list
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

/// One video resource with the parts the normalizer consumes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Video ID
    pub id: String,

    /// Snippet part (title, channel, thumbnails)
    pub snippet: Option<Snippet>,

    /// Content details part (ISO 8601 duration)
    pub content_details: Option<ContentDetails>,
}

/// Video snippet metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub channel_title: String,

    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Thumbnail variants by size
#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
}

/// A single thumbnail image reference
#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

/// Video content details
#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    /// ISO 8601 duration code, e.g. `PT3M45S`
    pub duration: String,
}
