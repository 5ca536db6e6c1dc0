// crates/danmaku-core/src/lib.rs
//
// Pure danmaku engine. No egui and no I/O on the frame path.
//
// Pipeline, once per rendered frame:
//   comments (sorted once per epoch)
//     → allocator::TrackAllocator::ensure_allocated_up_to   (lane + timing)
//     → visible::compute_visible_range                       (O(log n) window)
//     → render::position_at                                  (x, y per item)
//
// overlay::DanmakuOverlay ties the three together and owns the epoch
// lifecycle (rebuild on new comment snapshot or viewport change).

pub mod allocator;
pub mod color;
pub mod commands;
pub mod comment;
pub mod config;
pub mod helpers;
pub mod overlay;
pub mod render;
pub mod source_types;
pub mod visible;

pub use allocator::{TextMeasure, TrackAllocator};
pub use color::{parse_color, Rgba};
pub use comment::{CommentEvent, CommentRecord, EpisodeComments};
pub use config::{OverlayConfig, OverlayGeometry};
pub use overlay::{DanmakuOverlay, PlacedComment};
pub use visible::{compute_visible_range, VisibleRange};
