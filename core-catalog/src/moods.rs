//! Mood Query Table
//!
//! A fixed mapping from mood key to a canned free-text search query.
//! Read-only, process-wide, safe for unsynchronized concurrent reads.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Query substituted for mood keys that are not in the table.
pub const DEFAULT_QUERY: &str = "popular music";

const MOOD_QUERIES: &[(&str, &str)] = &[
    ("energetic", "upbeat energetic music workout"),
    ("calm", "relaxing calm music peaceful"),
    ("focused", "focus concentration study music"),
    ("happy", "happy uplifting feel good music"),
    ("chill", "chill lofi ambient music"),
    ("romantic", "romantic love songs"),
    ("party", "party dance electronic music"),
];

fn mood_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| MOOD_QUERIES.iter().copied().collect())
}

/// Resolve a mood key to its canned search query.
///
/// Unknown mood keys fall back to [`DEFAULT_QUERY`] rather than failing.
pub fn query_for_mood(mood: &str) -> &'static str {
    mood_table().get(mood).copied().unwrap_or(DEFAULT_QUERY)
}

/// The closed set of mood keys the table knows about.
pub fn known_moods() -> impl Iterator<Item = &'static str> {
    MOOD_QUERIES.iter().map(|(mood, _)| *mood)
}
