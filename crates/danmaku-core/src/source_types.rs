// crates/danmaku-core/src/source_types.rs
//
// Types that flow across the channel between danmaku-source and danmaku-ui.
// No egui and no file handles, just plain data.

use std::path::PathBuf;
use uuid::Uuid;
use crate::comment::CommentEvent;

/// Results sent from the SourceWorker background threads to the UI.
///
/// `request_id` is the id returned by `SourceWorker::load`. The UI keeps only
/// the newest id and drops anything older, so a slow load that finishes after
/// a newer one never overwrites it.
pub enum SourceResult {
    Comments { request_id: Uuid, path: PathBuf, episode: u32, comments: Vec<CommentEvent> },
    Error    { request_id: Uuid, path: PathBuf, msg: String },
}

impl SourceResult {
    pub fn request_id(&self) -> Uuid {
        match self {
            SourceResult::Comments { request_id, .. } => *request_id,
            SourceResult::Error    { request_id, .. } => *request_id,
        }
    }
}
