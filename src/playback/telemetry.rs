use crate::api::client::CatalogClient;
use std::sync::Arc;

/// Fires listen/click notifications on detached tasks. Neither event is
/// awaited by the caller and neither can fail visibly; the gateway already
/// swallows transport errors.
#[derive(Clone)]
pub struct TelemetryEmitter {
    client: Arc<CatalogClient>,
}

impl TelemetryEmitter {
    pub fn new(client: Arc<CatalogClient>) -> Self {
        Self { client }
    }

    /// A track started (or resumed) playing.
    pub fn click(&self, yt_id: &str) {
        let client = Arc::clone(&self.client);
        let yt_id = yt_id.to_string();
        tokio::spawn(async move {
            client.record_click(&yt_id).await;
        });
    }

    /// A track played to completion.
    pub fn listen(&self, yt_id: &str) {
        let client = Arc::clone(&self.client);
        let yt_id = yt_id.to_string();
        tokio::spawn(async move {
            client.record_listen(&yt_id).await;
        });
    }
}
