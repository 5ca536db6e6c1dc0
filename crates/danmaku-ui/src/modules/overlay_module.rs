// crates/danmaku-ui/src/modules/overlay_module.rs
//
// The video canvas plus the danmaku layer drawn over it.
//
// Decoding video is out of scope for this player, so the canvas is a black
// surface at the chosen aspect ratio. Everything the engine needs per frame
// comes from here: canvas size in physical pixels, pixels_per_point as the
// display density, and egui's font system for text measurement.

use danmaku_core::commands::{PlaybackState, PlayerCommand};
use danmaku_core::helpers::time::format_millis;
use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui, Vec2};

use super::PlayerModule;
use crate::context::AppContext;
use crate::helpers::color::to_color32;
use crate::helpers::measure::EguiMeasure;
use crate::theme::{ACCENT, DANMAKU_SHADOW, DARK_BORDER, DARK_TEXT_DIM};

const CANVAS_RATIO: f32 = 16.0 / 9.0;
/// Drop-shadow offset in points.
const SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);

pub struct OverlayModule;

impl PlayerModule for OverlayModule {
    fn name(&self) -> &str { "Overlay" }

    fn ui(&mut self, ui: &mut Ui, state: &PlaybackState, ctx: &mut AppContext, _cmd: &mut Vec<PlayerCommand>) {
        let panel_w = ui.available_width();
        let panel_h = ui.available_height().max(80.0);
        let (canvas_w, canvas_h) = {
            let h = panel_w / CANVAS_RATIO;
            if h <= panel_h { (panel_w, h) } else { (panel_h * CANVAS_RATIO, panel_h) }
        };

        let (outer, _) = ui.allocate_exact_size(Vec2::new(panel_w, panel_h), Sense::hover());
        let canvas = Rect::from_center_size(outer.center(), Vec2::new(canvas_w, canvas_h));

        let border = if state.is_playing {
            Stroke::new(1.5, ACCENT.gamma_multiply(0.55))
        } else {
            Stroke::new(1.0, DARK_BORDER)
        };
        ui.painter().rect_stroke(canvas.expand(1.0), 4.0, border, egui::StrokeKind::Outside);
        ui.painter().rect_filled(canvas, 3.0, Color32::BLACK);

        let painter = ui.painter_at(canvas);
        painter.text(
            canvas.right_bottom() - Vec2::new(8.0, 6.0),
            Align2::RIGHT_BOTTOM,
            format_millis(state.position_millis),
            FontId::monospace(11.0),
            DARK_TEXT_DIM,
        );

        let ppp       = ui.ctx().pixels_per_point();
        let font_pts  = ctx.overlay.config().font_size_sp;
        let overlay   = &mut ctx.overlay;
        let placed = ui.fonts(|fonts| {
            let mut measure = EguiMeasure::new(fonts, font_pts, ppp);
            overlay.frame(
                state.position_millis,
                canvas_w * ppp,
                canvas_h * ppp,
                ppp,
                &mut measure,
            )
        });

        let font = FontId::proportional(font_pts);
        for item in &placed {
            let pos = canvas.min + Vec2::new(item.x, item.y) / ppp;
            painter.text(pos + SHADOW_OFFSET, Align2::LEFT_TOP, &item.text, font.clone(), DANMAKU_SHADOW);
            painter.text(pos, Align2::LEFT_TOP, &item.text, font.clone(), to_color32(item.color));
        }
    }
}
