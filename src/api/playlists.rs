use crate::api::client::CatalogClient;
use crate::api::models::{PlaylistSummary, Track};
use crate::error::AppResult;
use reqwest::StatusCode;

/// Playlist and track operations.
///
/// Every public operation collapses transport failures and unexpected
/// status codes into a neutral absence value (empty vec, `None`, `false`)
/// instead of surfacing an error; callers only ever learn whether the
/// operation worked.
impl CatalogClient {
    pub async fn list_playlists(&self) -> Vec<PlaylistSummary> {
        self.try_list_playlists().await.unwrap_or_else(|e| {
            log::warn!("list_playlists failed: {}", e);
            Vec::new()
        })
    }

    async fn try_list_playlists(&self) -> AppResult<Vec<PlaylistSummary>> {
        let response = self.get("/playlists").await?;
        if response.status() != StatusCode::OK {
            return Ok(Vec::new());
        }
        Ok(response.json().await?)
    }

    pub async fn get_tracks(&self, playlist_id: &str) -> Vec<Track> {
        self.try_get_tracks(playlist_id).await.unwrap_or_else(|e| {
            log::warn!("get_tracks({}) failed: {}", playlist_id, e);
            Vec::new()
        })
    }

    async fn try_get_tracks(&self, playlist_id: &str) -> AppResult<Vec<Track>> {
        let response = self.get(&format!("/playlists/{}", playlist_id)).await?;
        if response.status() != StatusCode::OK {
            return Ok(Vec::new());
        }
        Ok(response.json().await?)
    }

    pub async fn search_tracks(&self, query: &str) -> Vec<Track> {
        self.try_search_tracks(query).await.unwrap_or_else(|e| {
            log::warn!("search_tracks failed: {}", e);
            Vec::new()
        })
    }

    async fn try_search_tracks(&self, query: &str) -> AppResult<Vec<Track>> {
        let response = self.get_with_query("/tracks", &[("query", query)]).await?;
        if response.status() != StatusCode::OK {
            return Ok(Vec::new());
        }
        Ok(response.json().await?)
    }

    /// Submit a video URL for addition. The server resolves the URL to a
    /// track, deduplicates, and answers 200 with the created track; any
    /// other status (including 201) counts as absence. The 200-not-201
    /// expectation matches the deployed backend.
    pub async fn add_track(&self, playlist_id: &str, yt_url: &str) -> Option<Track> {
        self.try_add_track(playlist_id, yt_url)
            .await
            .unwrap_or_else(|e| {
                log::warn!("add_track failed: {}", e);
                None
            })
    }

    async fn try_add_track(&self, playlist_id: &str, yt_url: &str) -> AppResult<Option<Track>> {
        let body = serde_json::json!({
            "playlist_id": playlist_id,
            "yt_url": yt_url,
        });
        let response = self.post_json("/playlists/add_track", &body).await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Success is exactly 204 No Content.
    pub async fn remove_track(&self, playlist_id: &str, track_id: &str) -> bool {
        let result = self
            .delete_with_query(
                &format!("/playlists/{}/remove_track", playlist_id),
                &[("track_id", track_id)],
            )
            .await;
        match result {
            Ok(response) => response.status() == StatusCode::NO_CONTENT,
            Err(e) => {
                log::warn!("remove_track failed: {}", e);
                false
            }
        }
    }

    pub async fn create_playlist(&self, name: &str) -> Option<PlaylistSummary> {
        self.try_create_playlist(name).await.unwrap_or_else(|e| {
            log::warn!("create_playlist failed: {}", e);
            None
        })
    }

    async fn try_create_playlist(&self, name: &str) -> AppResult<Option<PlaylistSummary>> {
        let body = serde_json::json!({ "name": name });
        let response = self.post_json("/playlists", &body).await?;
        if response.status() != StatusCode::CREATED {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    pub async fn rename_playlist(&self, new_name: &str, playlist_id: &str) -> Option<PlaylistSummary> {
        self.try_rename_playlist(new_name, playlist_id)
            .await
            .unwrap_or_else(|e| {
                log::warn!("rename_playlist failed: {}", e);
                None
            })
    }

    async fn try_rename_playlist(
        &self,
        new_name: &str,
        playlist_id: &str,
    ) -> AppResult<Option<PlaylistSummary>> {
        let body = serde_json::json!({ "name": new_name });
        let response = self
            .put_json(&format!("/playlists/{}", playlist_id), &body)
            .await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// True for any delivered response regardless of status; only a
    /// transport failure reports false.
    pub async fn delete_playlist(&self, name: &str) -> bool {
        match self.delete_with_query("/playlists", &[("name", name)]).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("delete_playlist failed: {}", e);
                false
            }
        }
    }

    /// `None` means the fetch failed; `Some(vec![])` means the server had
    /// nothing to recommend. Callers keep their previous list on `None`.
    pub async fn get_recommendations(&self, playlist_id: &str) -> Option<Vec<Track>> {
        self.try_get_recommendations(playlist_id)
            .await
            .unwrap_or_else(|e| {
                log::warn!("get_recommendations failed: {}", e);
                None
            })
    }

    async fn try_get_recommendations(&self, playlist_id: &str) -> AppResult<Option<Vec<Track>>> {
        let response = self
            .get(&format!("/playlists/{}/recommendations", playlist_id))
            .await?;
        if response.status() != StatusCode::OK {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }
}
