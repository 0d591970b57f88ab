use crate::api::client::CatalogClient;
use crate::api::models::{ArtistPopularity, HistoryEntry, PlaybackStat, TrackAddedAt};
use crate::error::AppResult;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::StatusCode;

/// Listening-statistics operations.
///
/// The two record_* calls are the write half of telemetry: best-effort,
/// no result to observe. Failures are logged at debug and dropped.
impl CatalogClient {
    /// Count one completed listen for a video id.
    pub async fn record_listen(&self, yt_id: &str) {
        let body = serde_json::json!({ "id": yt_id });
        if let Err(e) = self.post_json("/track/stat", &body).await {
            log::debug!("record_listen dropped: {}", e);
        }
    }

    /// Append a history entry for a video id that started playing.
    pub async fn record_click(&self, yt_id: &str) {
        let body = serde_json::json!({ "id": yt_id });
        if let Err(e) = self.post_json("/user/history", &body).await {
            log::debug!("record_click dropped: {}", e);
        }
    }

    /// How many times the current user has played this video.
    pub async fn get_playback_count(&self, yt_id: &str) -> Option<u64> {
        self.try_get_playback_count(yt_id).await.unwrap_or_else(|e| {
            log::warn!("get_playback_count failed: {}", e);
            None
        })
    }

    async fn try_get_playback_count(&self, yt_id: &str) -> AppResult<Option<u64>> {
        let response = self.get_with_query("/track/stat", &[("yt_id", yt_id)]).await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let stat: PlaybackStat = response.json().await?;
        Ok(Some(stat.track_playback))
    }

    /// Listening history, oldest entries first.
    pub async fn get_history(&self) -> Option<Vec<HistoryEntry>> {
        self.try_get_history().await.unwrap_or_else(|e| {
            log::warn!("get_history failed: {}", e);
            None
        })
    }

    async fn try_get_history(&self) -> AppResult<Option<Vec<HistoryEntry>>> {
        let response = self.get("/user/history").await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let mut entries: Vec<HistoryEntry> = response.json().await?;
        entries.sort_by_key(|entry| entry.created_at);
        Ok(Some(entries))
    }

    /// Per-artist play counts over a calendar-date range. Time of day is
    /// not part of the query; the server widens the end date to 23:59.
    pub async fn get_artist_popularity(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Option<Vec<ArtistPopularity>> {
        self.try_get_artist_popularity(start_date, end_date)
            .await
            .unwrap_or_else(|e| {
                log::warn!("get_artist_popularity failed: {}", e);
                None
            })
    }

    async fn try_get_artist_popularity(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Option<Vec<ArtistPopularity>>> {
        let response = self
            .get_with_query(
                "/artist/popularity",
                &[
                    ("start_date", start_date.to_string()),
                    ("end_date", end_date.to_string()),
                ],
            )
            .await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// When a track was added to a playlist.
    pub async fn track_added_at(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> Option<NaiveDateTime> {
        self.try_track_added_at(track_id, playlist_id)
            .await
            .unwrap_or_else(|e| {
                log::warn!("track_added_at failed: {}", e);
                None
            })
    }

    async fn try_track_added_at(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> AppResult<Option<NaiveDateTime>> {
        let response = self
            .get_with_query(
                "/track_plst/stat",
                &[("playlist_id", playlist_id), ("track_id", track_id)],
            )
            .await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        let added: TrackAddedAt = response.json().await?;
        Ok(Some(added.in_playlist_since))
    }
}
