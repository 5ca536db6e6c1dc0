// crates/danmaku-core/src/commands.rs
//
// Every user action in the player is a PlayerCommand.
// Modules emit these; app.rs applies them after the UI pass.
// Adding a new control = add a variant here + one match arm in app.rs.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    // ── Playback ─────────────────────────────────────────────────────────────
    Play,
    Pause,
    /// Jump the playback clock to an absolute position in milliseconds.
    Seek(i64),

    // ── Danmaku ──────────────────────────────────────────────────────────────
    /// Show or hide the overlay. Hidden overlays do no allocation work.
    ToggleDanmaku,
    /// Drop the current comment snapshot.
    ClearDanmaku,
    /// Load an episode comment file on the source worker.
    OpenComments(PathBuf),
    /// Pick which episode of the loaded file to show. Re-requests the file.
    SetEpisode(u32),
}

/// Playback clock state shared by the transport bar and the overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub position_millis: i64,
    pub is_playing:      bool,
    /// Length of the scrub range; the last comment plus one on-screen duration.
    pub length_millis:   i64,
}

impl PlaybackState {
    /// Advance the clock by `dt_millis` of wall time while playing. Stops at
    /// the end of the scrub range.
    pub fn tick(&mut self, dt_millis: i64) {
        if !self.is_playing { return; }
        self.position_millis = self.position_millis.saturating_add(dt_millis.max(0));
        if self.length_millis > 0 && self.position_millis >= self.length_millis {
            self.position_millis = self.length_millis;
            self.is_playing      = false;
        }
    }

    /// Clamp a requested seek target into `[0, length]`.
    pub fn seek(&mut self, target_millis: i64) {
        let upper = if self.length_millis > 0 { self.length_millis } else { i64::MAX };
        self.position_millis = target_millis.clamp(0, upper);
    }

    /// Start playing; from the top when parked at the end.
    pub fn play(&mut self) {
        if self.length_millis > 0 && self.position_millis >= self.length_millis {
            self.position_millis = 0;
        }
        self.is_playing = true;
    }

    /// Nothing loaded: stopped at zero with no scrub range.
    pub fn unload(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_only_advances_while_playing() {
        let mut pb = PlaybackState { length_millis: 10_000, ..Default::default() };
        pb.tick(16);
        assert_eq!(pb.position_millis, 0);
        pb.play();
        pb.tick(16);
        assert_eq!(pb.position_millis, 16);
    }

    #[test]
    fn tick_stops_at_end() {
        let mut pb = PlaybackState { position_millis: 9_990, is_playing: true, length_millis: 10_000 };
        pb.tick(100);
        assert_eq!(pb.position_millis, 10_000);
        assert!(!pb.is_playing);
    }

    #[test]
    fn play_at_end_restarts() {
        let mut pb = PlaybackState { position_millis: 10_000, is_playing: false, length_millis: 10_000 };
        pb.play();
        assert_eq!(pb.position_millis, 0);
        assert!(pb.is_playing);
    }

    #[test]
    fn unload_drops_scrub_range() {
        let mut pb = PlaybackState { position_millis: 4_000, is_playing: true, length_millis: 12_000 };
        pb.unload();
        assert_eq!(pb, PlaybackState::default());
        pb.seek(30_000);
        assert_eq!(pb.position_millis, 30_000);
    }

    #[test]
    fn seek_is_clamped() {
        let mut pb = PlaybackState { length_millis: 5_000, ..Default::default() };
        pb.seek(-10);
        assert_eq!(pb.position_millis, 0);
        pb.seek(9_000);
        assert_eq!(pb.position_millis, 5_000);
    }
}
