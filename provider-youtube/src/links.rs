//! Playback and Thumbnail URL Construction
//!
//! Deterministic URL builders derived from the video identifier alone.
//! No network calls are involved.

/// Embed player base URL
const EMBED_URL_BASE: &str = "https://www.youtube.com/embed";

/// Thumbnail image base URL
const THUMBNAIL_URL_BASE: &str = "https://img.youtube.com/vi";

/// Fixed player display flags: autoplay with the scripting interface
/// enabled, no controls chrome, no related-video suggestions.
const EMBED_PLAYER_FLAGS: &str =
    "autoplay=1&controls=0&showinfo=0&rel=0&modestbranding=1&enablejsapi=1";

/// Build the playback embed URL for a video identifier.
pub fn embed_url(video_id: &str) -> String {
    format!("{}/{}?{}", EMBED_URL_BASE, video_id, EMBED_PLAYER_FLAGS)
}

/// Build the medium-quality thumbnail URL for a video identifier.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("{}/{}/mqdefault.jpg", THUMBNAIL_URL_BASE, video_id)
}
