// crates/danmaku-ui/src/helpers/log.rs
//
// Unified logging for the player.
//
// Release builds use `windows_subsystem = "windows"`, so there is no console
// and `eprintln!` output is lost. Log lines go to a temp file instead.
//
// File: <temp>/danmaku-player.log (append-only, one line per call).
//
// Usage:
//   danmaku_log!("[source] loaded {n} comments for episode {ep}");

use std::io::Write;

/// Append `msg` to the player log. Never panics; a failed write is dropped.
pub fn vlog(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("danmaku-player.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
    #[cfg(debug_assertions)]
    eprintln!("{msg}");
}

/// Formats like `eprintln!` but routes through `vlog`.
#[macro_export]
macro_rules! danmaku_log {
    ($($arg:tt)*) => {
        $crate::helpers::log::vlog(&format!($($arg)*))
    };
}
