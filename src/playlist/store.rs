use crate::api::client::CatalogClient;
use crate::api::models::Track;
use crate::playlist::url::is_youtube_video_url;

/// Phase of an in-flight playlist mutation. Exposed so the interface layer
/// can disable the triggering control while a call is outstanding instead
/// of relying on convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote call succeeded and the local sequence was updated.
    Confirmed,
    /// The remote call failed or the input was invalid; nothing changed.
    Rejected,
    /// Another mutation is still pending; nothing was attempted.
    Busy,
}

/// In-memory ordered track collection for one playlist. Mutations are
/// two-phase: the remote call runs first and the local sequence changes
/// only on confirmation, so there is never anything to roll back.
#[derive(Debug)]
pub struct PlaylistStore {
    playlist_id: String,
    tracks: Vec<Track>,
    phase: MutationPhase,
}

impl PlaylistStore {
    pub fn new(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            tracks: Vec::new(),
            phase: MutationPhase::Idle,
        }
    }

    pub fn from_tracks(playlist_id: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            tracks,
            phase: MutationPhase::Idle,
        }
    }

    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn phase(&self) -> MutationPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == MutationPhase::Pending
    }

    /// Playable id sequence in playlist order.
    pub fn yt_ids(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.yt_id.clone()).collect()
    }

    /// Fetch the playlist content once, replacing the whole sequence.
    pub async fn load(&mut self, client: &CatalogClient) {
        self.tracks = client.get_tracks(&self.playlist_id).await;
    }

    /// Submit a video URL for addition. Malformed URLs are rejected before
    /// the gateway is involved. On success the server's returned track is
    /// appended; the server is the deduplication authority, so the
    /// response is trusted as the item to append.
    pub async fn add_track(&mut self, client: &CatalogClient, yt_url: &str) -> MutationOutcome {
        if self.is_busy() {
            return MutationOutcome::Busy;
        }
        if !is_youtube_video_url(yt_url) {
            return MutationOutcome::Rejected;
        }
        self.phase = MutationPhase::Pending;
        let result = client.add_track(&self.playlist_id, yt_url).await;
        self.phase = MutationPhase::Idle;
        match result {
            Some(track) => {
                self.tracks.push(track);
                MutationOutcome::Confirmed
            }
            None => MutationOutcome::Rejected,
        }
    }

    /// Remove a track by catalog id. The local sequence is filtered only
    /// after the server confirms with 204.
    pub async fn remove_track(&mut self, client: &CatalogClient, track_id: &str) -> MutationOutcome {
        if self.is_busy() {
            return MutationOutcome::Busy;
        }
        self.phase = MutationPhase::Pending;
        let removed = client.remove_track(&self.playlist_id, track_id).await;
        self.phase = MutationPhase::Idle;
        if removed {
            self.tracks.retain(|t| t.id != track_id);
            MutationOutcome::Confirmed
        } else {
            MutationOutcome::Rejected
        }
    }

    /// Derived view: tracks whose title or artist contains the query,
    /// case-insensitively. An empty query returns everything. The source
    /// sequence is never touched.
    pub fn filter(&self, query: &str) -> Vec<&Track> {
        if query.is_empty() {
            return self.tracks.iter().collect();
        }
        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.matches_query(&needle))
            .collect()
    }
}
