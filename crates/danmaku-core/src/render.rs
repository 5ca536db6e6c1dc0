// crates/danmaku-core/src/render.rs
//
// Lane + elapsed time → screen position. Constant velocity, right to left.

use crate::config::OverlayGeometry;

/// Top-left corner of a comment's text, relative to the overlay origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Position of a comment `elapsed_millis` after it entered, or `None` when it
/// is not on screen this frame (`elapsed < 0` or `elapsed >= duration`).
///
/// ```
/// use danmaku_core::config::{OverlayConfig, OverlayGeometry};
/// use danmaku_core::render::position_at;
/// let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 1000.0, 310.0, 1.0);
/// let p = position_at(&g, 0, 2).unwrap();
/// assert_eq!(p.x, g.start_x_px);
/// assert_eq!(p.y, 10.0 + 2.0 * 30.0);
/// assert!(position_at(&g, g.duration_millis, 2).is_none());
/// ```
pub fn position_at(geom: &OverlayGeometry, elapsed_millis: i64, lane: usize) -> Option<Position> {
    let duration = geom.duration_millis;
    if elapsed_millis < 0 || elapsed_millis >= duration {
        return None;
    }
    let progress = (elapsed_millis as f32 / duration as f32).clamp(0.0, 1.0);
    let lane     = lane.min(geom.lane_count.saturating_sub(1));
    Some(Position {
        x: geom.start_x_px - geom.travel_px * progress,
        y: geom.padding_top_px + geom.lane_height_px * lane as f32,
    })
}
