use crate::api::client::CatalogClient;
use crate::api::models::Track;
use crate::playback::controller::PlaybackController;
use crate::playback::player::{VideoPlayer, READY_PLAY_DELAY};
use crate::playback::telemetry::TelemetryEmitter;
use crate::playlist::recommendations::RecommendationList;
use crate::playlist::store::{MutationOutcome, PlaylistStore};
use crate::playlist::url::is_youtube_video_url;
use std::sync::Arc;

/// One open playlist view: the track collection, the now-playing pointer,
/// the recommendation list and the telemetry emitter, wired to the
/// embedded player's two lifecycle events. All state is owned here and
/// threaded explicitly; nothing is ambient.
pub struct PlaylistSession {
    client: Arc<CatalogClient>,
    store: PlaylistStore,
    controller: PlaybackController,
    recommendations: RecommendationList,
    telemetry: TelemetryEmitter,
}

impl PlaylistSession {
    /// Open a playlist: fetch its content once and prime the playback
    /// sequence from it.
    pub async fn open(client: Arc<CatalogClient>, playlist_id: impl Into<String>) -> Self {
        let mut store = PlaylistStore::new(playlist_id);
        store.load(&client).await;
        let mut controller = PlaybackController::new();
        controller.set_sequence(store.yt_ids());
        Self {
            telemetry: TelemetryEmitter::new(Arc::clone(&client)),
            client,
            store,
            controller,
            recommendations: RecommendationList::new(),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        self.store.tracks()
    }

    /// Filtered view of the playlist; the underlying sequence is untouched.
    pub fn filtered_tracks(&self, query: &str) -> Vec<&Track> {
        self.store.filter(query)
    }

    pub fn recommendations(&self) -> &[Track] {
        self.recommendations.tracks()
    }

    pub fn now_playing(&self) -> &str {
        self.controller.now_playing()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    /// Whether the add control should be enabled for this input: the URL
    /// must be a recognized video reference and no mutation may be in
    /// flight.
    pub fn can_submit_url(&self, yt_url: &str) -> bool {
        !self.store.is_busy() && is_youtube_video_url(yt_url)
    }

    /// Play or stop a track from the list. Loading the new video into the
    /// player restarts its lifecycle; the ready event that follows is what
    /// emits the click telemetry.
    pub fn toggle_track(&mut self, yt_id: &str, player: &dyn VideoPlayer) {
        self.controller.toggle(yt_id);
        if self.controller.is_playing() {
            player.load(self.controller.now_playing());
        }
    }

    /// Player finished internal setup. Waits out the player's warm-up
    /// window before commanding playback, then reports the click.
    pub async fn handle_player_ready(&self, player: &dyn VideoPlayer) {
        tokio::time::sleep(READY_PLAY_DELAY).await;
        player.play();
        player.seek_to_start();
        if self.controller.is_playing() {
            self.telemetry.click(self.controller.now_playing());
        }
    }

    /// Player reached the end of the current video: report the listen for
    /// the track that finished, advance the pointer, and load the next
    /// video. The finished id is captured before advancing.
    pub fn handle_player_end(&mut self, player: &dyn VideoPlayer) {
        if self.store.tracks().is_empty() {
            self.controller.stop();
            return;
        }
        let finished = self.controller.now_playing().to_string();
        self.controller.advance();
        if !finished.is_empty() {
            self.telemetry.listen(&finished);
        }
        player.load(self.controller.now_playing());
    }

    /// Add a track by URL. On confirmation the playback sequence picks up
    /// the appended track.
    pub async fn submit_track_url(&mut self, yt_url: &str) -> MutationOutcome {
        let outcome = self.store.add_track(&self.client, yt_url).await;
        if outcome == MutationOutcome::Confirmed {
            self.controller.set_sequence(self.store.yt_ids());
        }
        outcome
    }

    /// Remove a track by catalog id. If the removed track was playing, the
    /// player keeps running until natural end; the pointer is not cleared.
    pub async fn remove_track(&mut self, track_id: &str) -> MutationOutcome {
        let outcome = self.store.remove_track(&self.client, track_id).await;
        if outcome == MutationOutcome::Confirmed {
            self.controller.set_sequence(self.store.yt_ids());
        }
        outcome
    }

    /// Accept a recommendation into the playlist. Recommendations are not
    /// pre-trusted: the add goes through the same URL contract as manual
    /// input.
    pub async fn add_recommendation(&mut self, track: &Track) -> MutationOutcome {
        self.submit_track_url(&track.watch_url()).await
    }

    /// Replace the recommendation list with a fresh fetch for this
    /// playlist. Reports false (keeping the old list) if the fetch failed.
    pub async fn refresh_recommendations(&mut self) -> bool {
        self.recommendations
            .refresh(&self.client, self.store.playlist_id())
            .await
    }

    pub fn is_busy(&self) -> bool {
        self.store.is_busy()
    }
}
