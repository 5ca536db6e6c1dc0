// crates/danmaku-core/src/visible.rs
//
// Which comments can be on screen right now.
//
// Comments are sorted by start time, so everything whose start lies in
// [now - duration, now] is one contiguous run found with two binary searches.
// The run may include a comment that the render mapper still rejects (elapsed
// exactly == duration); callers filter per item.

use std::ops::Range;
use crate::helpers::search::{lower_bound, upper_bound};

/// Half-open index range `[first, last)`. `last >= first` always.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub first: usize,
    pub last:  usize,
}

impl VisibleRange {
    pub fn len(&self)      -> usize { self.last - self.first }
    pub fn is_empty(&self) -> bool  { self.last == self.first }
    pub fn indices(&self)  -> Range<usize> { self.first..self.last }
}

/// Indices whose start time lies in `[now - duration, now]`.
///
/// ```
/// use danmaku_core::visible::{compute_visible_range, VisibleRange};
/// let starts = [0, 1000, 2000, 5000];
/// assert_eq!(compute_visible_range(&starts, 2500, 3000),   VisibleRange { first: 0, last: 3 });
/// assert_eq!(compute_visible_range(&starts, 3500, 3000),   VisibleRange { first: 1, last: 3 });
/// assert_eq!(compute_visible_range(&starts, 10_000, 3000), VisibleRange { first: 4, last: 4 });
/// ```
pub fn compute_visible_range(start_times: &[i64], now: i64, duration_millis: i64) -> VisibleRange {
    if start_times.is_empty() {
        return VisibleRange::default();
    }
    let first = lower_bound(start_times, now.saturating_sub(duration_millis));
    let last  = upper_bound(start_times, now);
    VisibleRange { first, last: last.max(first) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTS: [i64; 4] = [0, 1000, 2000, 5000];

    #[test]
    fn mid_window() {
        // Window [-500, 2500]: the comment at 0 is still scrolling.
        let r = compute_visible_range(&STARTS, 2500, 3000);
        assert_eq!(r, VisibleRange { first: 0, last: 3 });
        assert_eq!(r.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn earliest_comment_drops_out_once_older_than_duration() {
        // Window [500, 3500].
        let r = compute_visible_range(&STARTS, 3500, 3000);
        assert_eq!(r, VisibleRange { first: 1, last: 3 });
        assert_eq!(r.indices().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn everything_scrolled_off() {
        let r = compute_visible_range(&STARTS, 10_000, 3000);
        assert_eq!(r, VisibleRange { first: 4, last: 4 });
        assert!(r.is_empty());
    }

    #[test]
    fn before_first_comment() {
        let r = compute_visible_range(&STARTS, -1, 3000);
        assert_eq!(r, VisibleRange { first: 0, last: 0 });
    }

    #[test]
    fn window_edges_are_inclusive() {
        // now - duration == 1000 and now == 2000 both included.
        let r = compute_visible_range(&STARTS, 2000, 1000);
        assert_eq!(r, VisibleRange { first: 1, last: 3 });
    }

    #[test]
    fn empty_input_gives_empty_range() {
        assert_eq!(compute_visible_range(&[], 1234, 3000), VisibleRange { first: 0, last: 0 });
    }

    #[test]
    fn negative_duration_never_inverts() {
        let r = compute_visible_range(&STARTS, 1000, -5000);
        assert!(r.last >= r.first);
        assert!(r.is_empty());
    }

    #[test]
    fn duplicate_start_times_all_included() {
        let starts = [100, 100, 100, 200];
        let r = compute_visible_range(&starts, 150, 100);
        assert_eq!(r.len(), 3);
    }
}
