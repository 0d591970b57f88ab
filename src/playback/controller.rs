/// Owns the now-playing pointer and the ordered id sequence it advances
/// through. The pointer is a YouTube video id; empty string means nothing
/// is playing.
#[derive(Debug, Default)]
pub struct PlaybackController {
    sequence: Vec<String>,
    now_playing: String,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playable sequence. The pointer is left untouched even
    /// if its id is no longer present: removing the playing track does not
    /// stop playback, the player runs until natural end.
    pub fn set_sequence(&mut self, sequence: Vec<String>) {
        self.sequence = sequence;
    }

    pub fn now_playing(&self) -> &str {
        &self.now_playing
    }

    pub fn is_playing(&self) -> bool {
        !self.now_playing.is_empty()
    }

    /// Play the given id, or stop if it is already playing. Switching from
    /// one track to another needs no intermediate stop.
    pub fn toggle(&mut self, yt_id: &str) {
        if self.now_playing == yt_id {
            self.now_playing.clear();
        } else {
            self.now_playing = yt_id.to_string();
        }
    }

    pub fn stop(&mut self) {
        self.now_playing.clear();
    }

    /// Move the pointer to the next track: the successor of the current
    /// id, wrapping to the first element from the last. An id that is not
    /// in the sequence (orphaned by removal) also lands on the first
    /// element. Must not be called with an empty sequence.
    pub fn advance(&mut self) {
        debug_assert!(!self.sequence.is_empty(), "advance on empty sequence");
        if self.sequence.is_empty() {
            self.now_playing.clear();
            return;
        }
        let next = match self.sequence.iter().position(|id| *id == self.now_playing) {
            Some(index) if index + 1 < self.sequence.len() => index + 1,
            _ => 0,
        };
        self.now_playing = self.sequence[next].clone();
    }
}
