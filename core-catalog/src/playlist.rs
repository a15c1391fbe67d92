//! Mood Playlist Sweep
//!
//! Populates the shipped mood playlists by fanning the mood queries out
//! concurrently. Each query gets its own timeout so one slow mood cannot
//! block the rest of the sweep; a timed-out or failed mood yields an empty
//! track list for that playlist only.

use std::time::Duration;

use catalog_traits::TrackDescriptor;
use futures::future;
use tokio::time::timeout;
use tracing::warn;

use crate::service::{CatalogService, MOOD_PLAYLIST_RESULTS};

/// Per-mood query timeout used when the caller does not supply one.
pub const DEFAULT_SWEEP_TIMEOUT: Duration = Duration::from_secs(10);

struct PlaylistDefinition {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    mood: &'static str,
}

const PLAYLIST_DEFINITIONS: &[PlaylistDefinition] = &[
    PlaylistDefinition {
        id: "energetic",
        title: "Energetic Vibes",
        description: "High-energy tracks to boost your mood",
        mood: "energetic",
    },
    PlaylistDefinition {
        id: "calm",
        title: "Chill & Relax",
        description: "Peaceful melodies for relaxation",
        mood: "calm",
    },
    PlaylistDefinition {
        id: "focused",
        title: "Focus Flow",
        description: "Instrumental beats for concentration",
        mood: "focused",
    },
    PlaylistDefinition {
        id: "happy",
        title: "Happy Moments",
        description: "Uplifting songs to make you smile",
        mood: "happy",
    },
    PlaylistDefinition {
        id: "chill",
        title: "Lo-Fi Chill",
        description: "Smooth beats for relaxation",
        mood: "chill",
    },
    PlaylistDefinition {
        id: "party",
        title: "Party Time",
        description: "Dance hits for celebration",
        mood: "party",
    },
];

/// A shipped mood playlist with its loaded tracks.
#[derive(Debug, Clone)]
pub struct MoodPlaylist {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mood: &'static str,
    pub tracks: Vec<TrackDescriptor>,
}

/// Load every shipped mood playlist concurrently.
///
/// The queries are launched independently, never sequenced, and each is
/// bounded by `per_call_timeout`.
pub async fn load_mood_playlists(
    service: &CatalogService,
    per_call_timeout: Duration,
) -> Vec<MoodPlaylist> {
    let loads = PLAYLIST_DEFINITIONS.iter().map(|definition| async move {
        let tracks = match timeout(
            per_call_timeout,
            service.search_by_mood(definition.mood, MOOD_PLAYLIST_RESULTS),
        )
        .await
        {
            Ok(tracks) => tracks,
            Err(_) => {
                warn!(
                    mood = definition.mood,
                    timeout_ms = per_call_timeout.as_millis() as u64,
                    "Mood playlist query timed out; rendering empty playlist"
                );
                Vec::new()
            }
        };

        MoodPlaylist {
            id: definition.id,
            title: definition.title,
            description: definition.description,
            mood: definition.mood,
            tracks,
        }
    });

    future::join_all(loads).await
}
