// crates/danmaku-core/src/overlay.rs
//
// DanmakuOverlay owns one comment snapshot plus the allocator epoch built from
// it, and turns a playback time into a list of comments to draw.
//
// Epoch lifecycle:
//   set_comments()     new snapshot, bumps the generation.
//   frame()            rebuilds the allocator when the EpochKey (generation,
//                      lane count, viewport size, density) differs from the
//                      one it was built for, then allocates and projects.
//   clear()            empty snapshot (still a new generation).
//
// Hidden overlays skip allocation entirely; showing again resumes from
// whatever time the next frame carries (a backward seek while hidden is
// detected normally on the next visible frame).

use std::sync::Arc;
use crate::allocator::{AllocatorParams, TextMeasure, TrackAllocator};
use crate::color::Rgba;
use crate::comment::CommentEvent;
use crate::config::{EpochKey, OverlayConfig, OverlayGeometry};
use crate::render::position_at;
use crate::visible::compute_visible_range;

/// One comment positioned for the current frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedComment {
    /// Index into the sorted comment sequence of the current epoch.
    pub index: usize,
    pub text:  String,
    pub color: Rgba,
    pub lane:  usize,
    pub x:     f32,
    pub y:     f32,
}

pub struct DanmakuOverlay {
    config:     OverlayConfig,
    comments:   Arc<[CommentEvent]>,
    generation: u64,
    visible:    bool,
    epoch:      Option<(EpochKey, OverlayGeometry, TrackAllocator)>,
}

impl DanmakuOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            comments:   Arc::from(Vec::<CommentEvent>::new()),
            generation: 0,
            visible:    true,
            epoch:      None,
        }
    }

    pub fn config(&self) -> &OverlayConfig { &self.config }

    /// Install a new comment snapshot.
    pub fn set_comments(&mut self, comments: impl Into<Arc<[CommentEvent]>>) {
        self.comments   = comments.into();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.set_comments(Vec::<CommentEvent>::new());
    }

    pub fn comment_count(&self) -> usize { self.comments.len() }

    pub fn is_visible(&self) -> bool { self.visible }
    pub fn toggle_visible(&mut self) { self.visible = !self.visible; }

    /// Geometry of the live epoch, if one has been built.
    pub fn geometry(&self) -> Option<&OverlayGeometry> {
        self.epoch.as_ref().map(|(_, g, _)| g)
    }

    pub fn allocator(&self) -> Option<&TrackAllocator> {
        self.epoch.as_ref().map(|(_, _, a)| a)
    }

    /// Advance to `now_millis` on a `width × height` viewport at `density`
    /// and return the comments to draw this frame, in sorted order.
    pub fn frame(
        &mut self,
        now_millis: i64,
        width_px:   f32,
        height_px:  f32,
        density:    f32,
        measure:    &mut dyn TextMeasure,
    ) -> Vec<PlacedComment> {
        if !self.visible {
            return Vec::new();
        }

        let geom = OverlayGeometry::from_viewport(&self.config, width_px, height_px, density);
        let key  = EpochKey::new(self.generation, &geom);
        let stale = self.epoch.as_ref().map(|(k, _, _)| *k != key).unwrap_or(true);
        if stale {
            let alloc = TrackAllocator::new(self.comments.to_vec(), AllocatorParams::from(&geom));
            self.epoch = Some((key, geom, alloc));
        }
        let Some((_, geom, alloc)) = self.epoch.as_mut() else {
            return Vec::new();
        };

        alloc.ensure_allocated_up_to(now_millis, measure);

        let range = compute_visible_range(alloc.start_times(), now_millis, geom.duration_millis);
        let mut placed = Vec::with_capacity(range.len());
        for i in range.indices() {
            let Some(lane) = alloc.lane_of(i) else { continue };
            let event   = &alloc.events()[i];
            let elapsed = now_millis - event.start_time_millis;
            let Some(pos) = position_at(geom, elapsed, lane) else { continue };
            placed.push(PlacedComment {
                index: i,
                text:  event.text.clone(),
                color: event.color,
                lane:  lane.min(geom.lane_count.saturating_sub(1)),
                x:     pos.x,
                y:     pos.y,
            });
        }
        placed
    }
}

impl Default for DanmakuOverlay {
    fn default() -> Self { Self::new(OverlayConfig::default()) }
}
