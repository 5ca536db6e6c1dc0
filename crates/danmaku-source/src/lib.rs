// crates/danmaku-source/src/lib.rs
//
// No egui dependency; communicates with danmaku-ui via channels only.
//
// To add a new comment source format:
//   1. Teach load.rs to recognise it
//   2. Nothing else. The worker hands back CommentEvents either way

pub mod load;
pub mod worker;

// Re-export the main public API so danmaku-ui imports are simple.
pub use worker::SourceWorker;
pub use danmaku_core::source_types::SourceResult;
