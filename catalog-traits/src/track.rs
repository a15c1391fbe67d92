//! Track Descriptor Model
//!
//! The normalized, display-ready record describing one playable item.

use serde::{Deserialize, Serialize};

/// A fully-populated, display-ready track record.
///
/// Providers must only emit complete descriptors: a record missing its
/// snippet, thumbnail, or duration data is dropped during normalization
/// rather than emitted partially. `duration_text` is always human-readable
/// (`M:SS` or `H:MM:SS`), never a raw ISO 8601 duration code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Opaque catalog identifier, unique within one response batch
    pub id: String,

    /// Display name (arbitrary text, not guaranteed non-empty)
    pub title: String,

    /// Display name of the uploading channel
    pub artist: String,

    /// Absolute URL to a preview image
    pub thumbnail_url: String,

    /// Human-readable duration, `M:SS` or `H:MM:SS`
    pub duration_text: String,

    /// Redundant copy of `artist`, retained for display flexibility
    pub channel_title: String,
}
