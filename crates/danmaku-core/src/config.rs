// crates/danmaku-core/src/config.rs
//
// Overlay configuration and the viewport-derived geometry built from it.
//
//   OverlayConfig     user-tunable, serialized, density-independent units.
//   OverlayGeometry   pixel values for one (viewport, density) combination.
//                     Rebuilt whenever the viewport changes; never serialized.
//
// Geometry feeds the allocator (speed, gap, lane count, warm-up window) and
// the render mapper (start x, travel, lane height, top padding).

use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long a comment takes to cross the screen.
    pub duration_millis:            i64,
    pub lane_height_dp:             f32,
    pub padding_top_dp:             f32,
    /// Minimum horizontal spacing between consecutive comments in a lane.
    pub gap_dp:                     f32,
    pub font_size_sp:               f32,
    /// Added to `duration_millis` to form the fast-forward warm-up window.
    pub warmup_slack_millis:        i64,
    /// Backward jumps smaller than this are treated as frame jitter.
    pub back_seek_tolerance_millis: i64,
    /// Lower bound for the off-screen run-in on each side, in raw pixels.
    pub min_extra_travel_px:        f32,
    /// Off-screen run-in as a fraction of viewport width.
    pub extra_travel_ratio:         f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            duration_millis:            10_000,
            lane_height_dp:             30.0,
            padding_top_dp:             10.0,
            gap_dp:                     16.0,
            font_size_sp:               20.0,
            warmup_slack_millis:        2_000,
            back_seek_tolerance_millis: 500,
            min_extra_travel_px:        48.0,
            extra_travel_ratio:         0.15,
        }
    }
}

impl OverlayConfig {
    /// Read a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading overlay config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing overlay config {}", path.display()))
    }

    /// Write the config as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("writing overlay config {}", path.display()))
    }

    /// Warm-up window for the allocator's fast-forward skip.
    pub fn warmup_window_millis(&self) -> i64 {
        self.duration_millis.saturating_add(self.warmup_slack_millis)
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Pixel geometry for one viewport. All lengths in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    pub width_px:           f32,
    pub height_px:          f32,
    pub density:            f32,
    pub lane_height_px:     f32,
    pub padding_top_px:     f32,
    pub gap_px:             f32,
    pub lane_count:         usize,
    /// X of a comment's left edge at elapsed = 0 (just off the right edge).
    pub start_x_px:         f32,
    /// Total distance travelled over `duration_millis`.
    pub travel_px:          f32,
    pub speed_px_per_ms:    f32,
    pub duration_millis:    i64,
    pub warmup_millis:      i64,
    pub back_seek_tolerance_millis: i64,
}

impl OverlayGeometry {
    /// Derive geometry for a `width_px × height_px` viewport at `density`
    /// physical pixels per density-independent pixel.
    ///
    /// ```
    /// use danmaku_core::config::{OverlayConfig, OverlayGeometry};
    /// let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 1000.0, 310.0, 1.0);
    /// assert_eq!(g.lane_count, 10);
    /// assert_eq!(g.start_x_px, 1150.0);
    /// assert_eq!(g.travel_px,  2300.0);
    /// ```
    pub fn from_viewport(cfg: &OverlayConfig, width_px: f32, height_px: f32, density: f32) -> Self {
        let density        = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        let width_px       = width_px.max(0.0);
        let height_px      = height_px.max(0.0);
        let lane_height_px = cfg.lane_height_dp * density;
        let padding_top_px = cfg.padding_top_dp * density;

        let lane_count = if lane_height_px > 0.0 {
            ((height_px - padding_top_px) / lane_height_px).max(0.0) as usize
        } else {
            0
        }.max(1);

        let extra      = cfg.min_extra_travel_px.max(width_px * cfg.extra_travel_ratio);
        let start_x_px = width_px + extra;
        let travel_px  = 2.0 * width_px + 2.0 * extra;
        let speed_px_per_ms = if cfg.duration_millis > 0 {
            travel_px / cfg.duration_millis as f32
        } else {
            0.0
        };

        Self {
            width_px,
            height_px,
            density,
            lane_height_px,
            padding_top_px,
            gap_px:       cfg.gap_dp * density,
            lane_count,
            start_x_px,
            travel_px,
            speed_px_per_ms,
            duration_millis: cfg.duration_millis,
            warmup_millis:   cfg.warmup_window_millis(),
            back_seek_tolerance_millis: cfg.back_seek_tolerance_millis,
        }
    }
}

/// Identity of one allocator epoch. Any field changing invalidates all lane
/// assignments. Float fields are compared bitwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpochKey {
    pub generation:   u64,
    pub lane_count:   usize,
    pub width_bits:   u32,
    pub height_bits:  u32,
    pub density_bits: u32,
}

impl EpochKey {
    pub fn new(generation: u64, geom: &OverlayGeometry) -> Self {
        Self {
            generation,
            lane_count:   geom.lane_count,
            width_bits:   geom.width_px.to_bits(),
            height_bits:  geom.height_px.to_bits(),
            density_bits: geom.density.to_bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_count_never_below_one() {
        let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 800.0, 5.0, 1.0);
        assert_eq!(g.lane_count, 1);
        let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 0.0, 0.0, 1.0);
        assert_eq!(g.lane_count, 1);
    }

    #[test]
    fn density_scales_pixel_lengths() {
        let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 1920.0, 1080.0, 2.0);
        assert_eq!(g.lane_height_px, 60.0);
        assert_eq!(g.padding_top_px, 20.0);
        assert_eq!(g.gap_px, 32.0);
        // (1080 - 20) / 60 = 17.67
        assert_eq!(g.lane_count, 17);
    }

    #[test]
    fn narrow_viewport_uses_minimum_run_in() {
        let g = OverlayGeometry::from_viewport(&OverlayConfig::default(), 100.0, 400.0, 1.0);
        assert_eq!(g.start_x_px, 148.0);
        assert_eq!(g.travel_px, 296.0);
    }

    #[test]
    fn zero_duration_means_zero_speed() {
        let cfg = OverlayConfig { duration_millis: 0, ..OverlayConfig::default() };
        let g = OverlayGeometry::from_viewport(&cfg, 1000.0, 500.0, 1.0);
        assert_eq!(g.speed_px_per_ms, 0.0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: OverlayConfig = serde_json::from_str(r#"{"duration_millis": 8000}"#).unwrap();
        assert_eq!(cfg.duration_millis, 8000);
        assert_eq!(cfg.gap_dp, 16.0);
        assert_eq!(cfg.warmup_window_millis(), 10_000);
    }

    #[test]
    fn missing_file_is_an_error_naming_the_path() {
        let err = OverlayConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = OverlayConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing overlay config"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.json");
        let cfg  = OverlayConfig { duration_millis: 7_500, gap_dp: 24.0, ..OverlayConfig::default() };
        cfg.save(&path).unwrap();
        assert_eq!(OverlayConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn epoch_key_tracks_viewport() {
        let cfg = OverlayConfig::default();
        let a = OverlayGeometry::from_viewport(&cfg, 1000.0, 500.0, 1.0);
        let b = OverlayGeometry::from_viewport(&cfg, 1001.0, 500.0, 1.0);
        assert_eq!(EpochKey::new(1, &a), EpochKey::new(1, &a));
        assert_ne!(EpochKey::new(1, &a), EpochKey::new(1, &b));
        assert_ne!(EpochKey::new(1, &a), EpochKey::new(2, &a));
    }
}
