// crates/danmaku-core/src/helpers/search.rs
//
// Binary-search bounds over ascending i64 slices. Shared by the allocator's
// fast-forward skip and the visible-window selector.

/// Index of the first element `>= value` (len when none).
///
/// ```
/// use danmaku_core::helpers::search::lower_bound;
/// assert_eq!(lower_bound(&[0, 10, 10, 20], 10), 1);
/// assert_eq!(lower_bound(&[0, 10, 10, 20], 25), 4);
/// ```
#[inline]
pub fn lower_bound(sorted: &[i64], value: i64) -> usize {
    sorted.partition_point(|&t| t < value)
}

/// Index of the first element `> value` (len when none).
///
/// ```
/// use danmaku_core::helpers::search::upper_bound;
/// assert_eq!(upper_bound(&[0, 10, 10, 20], 10), 3);
/// assert_eq!(upper_bound(&[0, 10, 10, 20], -1), 0);
/// ```
#[inline]
pub fn upper_bound(sorted: &[i64], value: i64) -> usize {
    sorted.partition_point(|&t| t <= value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_bounds_are_zero() {
        assert_eq!(lower_bound(&[], 5), 0);
        assert_eq!(upper_bound(&[], 5), 0);
    }

    #[test]
    fn extreme_values() {
        let s = [i64::MIN, 0, i64::MAX];
        assert_eq!(lower_bound(&s, i64::MIN), 0);
        assert_eq!(upper_bound(&s, i64::MIN), 1);
        assert_eq!(lower_bound(&s, i64::MAX), 2);
        assert_eq!(upper_bound(&s, i64::MAX), 3);
    }
}
