// crates/danmaku-ui/src/context.rs
//
// AppContext owns every runtime handle that is NOT part of the persisted
// player settings. DanmakuApp holds one of these plus a PlaybackState and the
// module list.
//
//   AppContext
//     ├── source            comment-file loader thread + result channel
//     ├── overlay           the danmaku engine (snapshot + allocator epoch)
//     ├── pending_request   newest load id; older results are dropped
//     └── status            one-line message for the transport bar

use std::path::PathBuf;
use uuid::Uuid;

use danmaku_core::commands::PlaybackState;
use danmaku_core::config::OverlayConfig;
use danmaku_core::overlay::DanmakuOverlay;
use danmaku_source::{SourceResult, SourceWorker};

pub struct AppContext {
    pub source:          SourceWorker,
    pub overlay:         DanmakuOverlay,
    pub pending_request: Option<Uuid>,
    /// File the current snapshot came from (or is being loaded from).
    pub comments_path:   Option<PathBuf>,
    pub episode:         u32,
    pub status:          Option<String>,
}

impl AppContext {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            source:          SourceWorker::new(),
            overlay:         DanmakuOverlay::new(config),
            pending_request: None,
            comments_path:   None,
            episode:         1,
            status:          None,
        }
    }

    /// Queue a load of `path` for the current episode. Supersedes any load
    /// still in flight.
    pub fn request_comments(&mut self, path: PathBuf) {
        crate::danmaku_log!("[source] loading episode {} from {}", self.episode, path.display());
        self.pending_request = Some(self.source.load(path.clone(), self.episode));
        self.comments_path   = Some(path);
        self.status          = Some("Loading comments…".to_string());
    }

    /// Forget the current comments entirely: the snapshot, the file it came
    /// from (so the next launch does not reload it), any load in flight and
    /// the scrub range derived from it.
    pub fn clear_comments(&mut self, playback: &mut PlaybackState) {
        self.overlay.clear();
        self.pending_request = None;
        self.comments_path   = None;
        self.status          = Some("Comments cleared".to_string());
        playback.unload();
    }

    /// Drain finished loads. Stale results are dropped; a failed load keeps
    /// the previous snapshot.
    pub fn ingest_source_results(&mut self, playback: &mut PlaybackState) {
        while let Ok(result) = self.source.rx.try_recv() {
            if self.pending_request != Some(result.request_id()) {
                crate::danmaku_log!("[source] dropping stale result {}", result.request_id());
                continue;
            }
            self.pending_request = None;

            match result {
                SourceResult::Comments { episode, comments, .. } => {
                    let last_start = comments.iter().map(|c| c.start_time_millis).max().unwrap_or(0);
                    playback.length_millis = last_start.max(0)
                        .saturating_add(self.overlay.config().duration_millis);
                    crate::danmaku_log!("[source] episode {episode}: {} comments", comments.len());
                    self.status = Some(format!("Episode {episode}: {} comments", comments.len()));
                    self.overlay.set_comments(comments);
                }
                SourceResult::Error { path, msg, .. } => {
                    crate::danmaku_log!("[source] {}: {msg}", path.display());
                    self.status = Some(format!("Could not load comments: {msg}"));
                }
            }
        }
    }
}
