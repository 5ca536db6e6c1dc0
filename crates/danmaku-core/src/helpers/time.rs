// crates/danmaku-core/src/helpers/time.rs
//
// Time conversions shared by the engine and the player shell.
//
// The engine runs entirely on integer milliseconds; seconds only appear at the
// comment-source boundary and in the transport bar readout.

/// Convert a source timestamp in seconds to integer milliseconds,
/// truncating toward zero. NaN maps to 0; out-of-range values saturate.
///
/// ```
/// use danmaku_core::helpers::time::secs_to_millis;
/// assert_eq!(secs_to_millis(1.5),    1_500);
/// assert_eq!(secs_to_millis(0.0009), 0);
/// assert_eq!(secs_to_millis(-2.25),  -2_250);
/// ```
pub fn secs_to_millis(secs: f64) -> i64 {
    (secs * 1000.0) as i64
}

/// Format a playback position in milliseconds as `M:SS` or `H:MM:SS`.
///
/// | Range      | Format    | Example   |
/// |------------|-----------|-----------|
/// | ≥ 1 h      | `H:MM:SS` | `1:04:35` |
/// | < 1 h      | `M:SS`    | `3:07`    |
///
/// Negative positions clamp to `0:00`.
///
/// ```
/// use danmaku_core::helpers::time::format_millis;
/// assert_eq!(format_millis(0),         "0:00");
/// assert_eq!(format_millis(187_400),   "3:07");
/// assert_eq!(format_millis(3_875_000), "1:04:35");
/// ```
pub fn format_millis(ms: i64) -> String {
    let secs = ms.max(0) / 1000;
    if secs >= 3600 {
        format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
