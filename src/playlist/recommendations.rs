use crate::api::client::CatalogClient;
use crate::api::models::Track;

/// Recommended tracks for the active playlist, separate from the playlist
/// content itself. Each explicit refresh replaces the list wholesale.
#[derive(Debug, Default)]
pub struct RecommendationList {
    tracks: Vec<Track>,
}

impl RecommendationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Fetch fresh recommendations and replace the current list. A failed
    /// fetch keeps the previous list and reports false; an empty result is
    /// a valid replacement.
    pub async fn refresh(&mut self, client: &CatalogClient, playlist_id: &str) -> bool {
        match client.get_recommendations(playlist_id).await {
            Some(tracks) => {
                self.tracks = tracks;
                true
            }
            None => false,
        }
    }
}
