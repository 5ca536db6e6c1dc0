#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod context;
mod helpers;
mod modules;
mod theme;

use std::path::{Path, PathBuf};
use danmaku_core::config::OverlayConfig;

/// Usage: `danmaku-player [COMMENTS.json] [--config OVERLAY.json]`
fn main() -> eframe::Result {
    let (comments, config_path) = parse_args(std::env::args().skip(1));

    let config = config_path.as_deref().map(load_or_create_config);

    let native_options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_title("Danmaku Player")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "DanmakuPlayer",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::DanmakuApp::new(cc, config, comments)))),
    )
}

/// A config path that does not exist yet gets the defaults written to it so
/// there is a file to edit. Unreadable or malformed files fall back to the
/// defaults without touching the file.
fn load_or_create_config(path: &Path) -> OverlayConfig {
    if !path.exists() {
        let cfg = OverlayConfig::default();
        match cfg.save(path) {
            Ok(())  => danmaku_log!("[app] wrote default overlay config to {}", path.display()),
            Err(e)  => danmaku_log!("[app] {e:#}"),
        }
        return cfg;
    }
    OverlayConfig::load(path).unwrap_or_else(|e| {
        danmaku_log!("[app] {e:#}, using defaults");
        OverlayConfig::default()
    })
}

/// First positional argument is a comment file; `--config <path>` names an
/// overlay config file. Unknown flags are logged and ignored.
fn parse_args(mut args: impl Iterator<Item = String>) -> (Option<PathBuf>, Option<PathBuf>) {
    let mut comments = None;
    let mut config   = None;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config = args.next().map(PathBuf::from);
        } else if arg.starts_with("--") {
            danmaku_log!("[app] ignoring unknown flag {arg}");
        } else if comments.is_none() {
            comments = Some(PathBuf::from(arg));
        } else {
            danmaku_log!("[app] ignoring extra argument {arg}");
        }
    }
    (comments, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn positional_and_config() {
        let (c, cfg) = parse_args(args(&["ep.json", "--config", "overlay.json"]));
        assert_eq!(c, Some(PathBuf::from("ep.json")));
        assert_eq!(cfg, Some(PathBuf::from("overlay.json")));
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse_args(args(&[])), (None, None));
    }

    #[test]
    fn missing_config_is_created_with_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.json");
        assert_eq!(load_or_create_config(&path), OverlayConfig::default());
        assert!(path.exists());
        assert_eq!(OverlayConfig::load(&path).unwrap(), OverlayConfig::default());
    }

    #[test]
    fn malformed_config_falls_back_and_is_left_alone() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.json");
        std::fs::write(&path, "nope").unwrap();
        assert_eq!(load_or_create_config(&path), OverlayConfig::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nope");
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let (c, cfg) = parse_args(args(&["--verbose", "a.json", "b.json"]));
        assert_eq!(c, Some(PathBuf::from("a.json")));
        assert_eq!(cfg, None);
    }
}
