//! Catalog core facade and bootstrap helpers.
//!
//! This crate wires a catalog backend (by default the YouTube provider over
//! the reqwest bridge, behind the `native` feature) into the
//! [`CatalogService`] facade, and carries the mood table, the mood playlist
//! sweep, and the boundary failure policy: typed search failures collapse
//! into an empty result set exactly once, here, with the original cause
//! logged.

pub mod error;
pub mod logging;
pub mod moods;
pub mod playlist;
pub mod service;

#[cfg(feature = "native")]
pub mod config;

pub use error::{Result, SetupError};

pub use moods::{query_for_mood, DEFAULT_QUERY};
pub use playlist::{load_mood_playlists, MoodPlaylist, DEFAULT_SWEEP_TIMEOUT};
pub use service::{
    CatalogService, DEFAULT_SEARCH_RESULTS, MOOD_PLAYLIST_RESULTS, TRENDING_RESULTS,
};

#[cfg(feature = "native")]
pub use config::CatalogConfig;
