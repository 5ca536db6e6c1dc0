// crates/danmaku-core/src/allocator.rs
//
// Lane allocation for scrolling comments.
//
// Each lane remembers when it is next free: the start time at which a new
// comment can enter without catching the tail of the comment already in it.
// Allocation is lazy and incremental: each frame only the comments whose start
// time has been reached since the last call are placed.
//
// Layout:
//   events        comments, stably sorted by start time. Never reordered.
//   start_times   parallel copy of the sort keys for binary search.
//   slots         per-comment allocation state (measured width, lane), indexed
//                 like `events`. Lives for the whole epoch; measurements
//                 survive seek resets, lane assignments are overwritten.
//   lanes         next-free time per lane.
//
// Seeking:
//   backward (beyond tolerance) → every lane freed, cursor back to 0.
//   forward past the warm-up    → cursor jumps straight to the first comment
//                                 that could still be on screen.

use crate::comment::CommentEvent;
use crate::config::OverlayGeometry;
use crate::helpers::search::lower_bound;

/// Free-lane sentinel.
const LANE_FREE: i64 = i64::MIN;

/// Pixel width of a single line of comment text.
///
/// The UI implements this on top of its font system. Called at most once per
/// comment per epoch.
pub trait TextMeasure {
    fn text_width(&mut self, text: &str) -> f32;
}

impl<F: FnMut(&str) -> f32> TextMeasure for F {
    fn text_width(&mut self, text: &str) -> f32 {
        self(text)
    }
}

/// Cached text width for one comment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measured {
    Pending,
    Width(f32),
}

/// Per-comment allocation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub width: Measured,
    /// Lane chosen the last time this comment was allocated.
    pub lane:  Option<usize>,
}

impl Default for Slot {
    fn default() -> Self {
        Self { width: Measured::Pending, lane: None }
    }
}

/// Tuning that stays fixed for one epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AllocatorParams {
    pub lane_count:          usize,
    pub speed_px_per_ms:     f32,
    pub gap_px:              f32,
    pub warmup_millis:       i64,
    pub back_seek_tolerance: i64,
}

impl From<&OverlayGeometry> for AllocatorParams {
    fn from(g: &OverlayGeometry) -> Self {
        Self {
            lane_count:          g.lane_count,
            speed_px_per_ms:     g.speed_px_per_ms,
            gap_px:              g.gap_px,
            warmup_millis:       g.warmup_millis,
            back_seek_tolerance: g.back_seek_tolerance_millis,
        }
    }
}

pub struct TrackAllocator {
    events:      Vec<CommentEvent>,
    start_times: Vec<i64>,
    slots:       Vec<Slot>,
    lanes:       Vec<i64>,
    params:      AllocatorParams,
    /// Index of the first comment not yet allocated.
    allocated_until: usize,
    /// Playback time passed to the most recent `ensure_allocated_up_to`.
    last_time:       Option<i64>,
}

impl TrackAllocator {
    /// Build a fresh epoch. `events` may arrive in any order; ties keep their
    /// input order. A lane count of zero is raised to one.
    pub fn new(mut events: Vec<CommentEvent>, params: AllocatorParams) -> Self {
        events.sort_by_key(|e| e.start_time_millis);
        let start_times = events.iter().map(|e| e.start_time_millis).collect();
        let slots       = vec![Slot::default(); events.len()];
        let lane_count  = params.lane_count.max(1);
        Self {
            events,
            start_times,
            slots,
            lanes: vec![LANE_FREE; lane_count],
            params: AllocatorParams { lane_count, ..params },
            allocated_until: 0,
            last_time:       None,
        }
    }

    pub fn events(&self)      -> &[CommentEvent] { &self.events }
    pub fn start_times(&self) -> &[i64]          { &self.start_times }
    pub fn slots(&self)       -> &[Slot]         { &self.slots }
    pub fn lane_count(&self)  -> usize           { self.lanes.len() }
    pub fn allocated_until(&self) -> usize       { self.allocated_until }

    /// Next-free time per lane; `i64::MIN` means free.
    pub fn lane_available_at(&self) -> &[i64] { &self.lanes }

    /// Lane from the most recent allocation of comment `i`, if it has ever
    /// been allocated this epoch.
    pub fn lane_of(&self, i: usize) -> Option<usize> {
        self.slots.get(i).and_then(|s| s.lane)
    }

    /// Advance allocation to `now`. Safe to call every frame; repeated calls
    /// with the same `now` change nothing.
    pub fn ensure_allocated_up_to(&mut self, now: i64, measure: &mut dyn TextMeasure) {
        if let Some(last) = self.last_time {
            if now.saturating_add(self.params.back_seek_tolerance) < last {
                self.reset();
            }
        }

        if self.allocated_until == 0 {
            if let Some(&earliest) = self.start_times.first() {
                if now > earliest.saturating_add(self.params.warmup_millis) {
                    let horizon = now.saturating_sub(self.params.warmup_millis);
                    self.allocated_until = lower_bound(&self.start_times, horizon);
                }
            }
        }
        self.last_time = Some(now);

        while self.allocated_until < self.events.len() {
            let i     = self.allocated_until;
            let start = self.start_times[i];
            if start > now { break; }

            let width = match self.slots[i].width {
                Measured::Width(w) => w,
                Measured::Pending  => {
                    let w = measure.text_width(&self.events[i].text);
                    self.slots[i].width = Measured::Width(w);
                    w
                }
            };

            let lane = self.choose_lane(start);
            self.slots[i].lane = Some(lane);
            self.lanes[lane]   = self.available_at(start, width);
            self.allocated_until += 1;
        }
    }

    /// Lane 0 when free; else the first free lane; else the lane that frees
    /// soonest (first in scan order on ties).
    fn choose_lane(&self, start: i64) -> usize {
        let mut best      = 0;
        let mut best_time = self.lanes[0];
        if start >= best_time { return 0; }

        for (lane, &at) in self.lanes.iter().enumerate().skip(1) {
            if start >= at { return lane; }
            if at < best_time {
                best_time = at;
                best      = lane;
            }
        }
        best
    }

    /// When the lane frees up after a comment of `width_px` enters at `start`.
    fn available_at(&self, start: i64, width_px: f32) -> i64 {
        let speed = self.params.speed_px_per_ms;
        if speed.is_nan() || speed <= 0.0 {
            return start;
        }
        let delta = ((width_px + self.params.gap_px) / speed).ceil();
        let delta = if delta.is_finite() { delta.max(0.0) as i64 } else { 0 };
        start.saturating_add(delta)
    }

    fn reset(&mut self) {
        self.allocated_until = 0;
        self.lanes.fill(LANE_FREE);
    }
}
