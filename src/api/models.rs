use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A track inside a playlist. `id` is the catalog identity assigned by the
/// server (used for removal and de-duplication); `yt_id` is the YouTube
/// video id used to drive the embedded player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub yt_id: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub score: Option<f64>,
}

impl Track {
    /// Short-form watch link for this track. Submitting a recommendation
    /// back into a playlist goes through the same add-by-URL contract as
    /// user input, so this is the shape the server receives.
    pub fn watch_url(&self) -> String {
        format!("https://youtu.be/{}", self.yt_id)
    }

    /// Case-insensitive substring match over title or artist.
    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.artist.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub tracks_amount: u32,
}

/// One listening-history record, newest entries carry later `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub created_at: NaiveDateTime,
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistPopularity {
    pub artist: String,
    pub play_count: u64,
}

/// Wire envelope for `GET /track/stat`.
#[derive(Debug, Deserialize)]
pub struct PlaybackStat {
    pub track_playback: u64,
}

/// Wire envelope for `GET /track_plst/stat`.
#[derive(Debug, Deserialize)]
pub struct TrackAddedAt {
    pub in_playlist_since: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}
