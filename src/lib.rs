pub mod api;
pub mod config;
pub mod error;
pub mod playback;
pub mod playlist;
pub mod session;

pub use api::client::CatalogClient;
pub use api::models::{ArtistPopularity, HistoryEntry, PlaylistSummary, Track, User};
pub use config::ClientConfig;
pub use error::{AppError, AppResult};
pub use playback::controller::PlaybackController;
pub use playback::player::{VideoPlayer, READY_PLAY_DELAY};
pub use playback::telemetry::TelemetryEmitter;
pub use playlist::recommendations::RecommendationList;
pub use playlist::store::{MutationOutcome, MutationPhase, PlaylistStore};
pub use playlist::url::is_youtube_video_url;
pub use session::PlaylistSession;
