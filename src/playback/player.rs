use std::time::Duration;

/// Delay between the embedded player's ready event and the play command.
/// The player silently ignores a play call issued while it is still
/// finishing internal setup.
pub const READY_PLAY_DELAY: Duration = Duration::from_millis(100);

/// Boundary to the embedded video player. The player itself is a black
/// box; it notifies the session of exactly two lifecycle events (ready,
/// end) and accepts these imperative commands in return.
pub trait VideoPlayer: Send + Sync {
    /// Load a video by its YouTube id.
    fn load(&self, yt_id: &str);

    /// Start playback of the loaded video.
    fn play(&self);

    /// Seek to position zero.
    fn seek_to_start(&self);
}
