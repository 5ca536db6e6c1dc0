// src/theme.rs
use egui::{Context, Color32, Stroke, Visuals, Style};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const ACCENT:        Color32 = Color32::from_rgb( 90, 170, 255);
pub const ACCENT_DIM:    Color32 = Color32::from_rgb( 40, 100, 170);
pub const ACCENT_HOVER:  Color32 = Color32::from_rgb(140, 200, 255);

pub const DARK_BG_0:     Color32 = Color32::from_rgb( 12,  12,  14);
pub const DARK_BG_1:     Color32 = Color32::from_rgb( 20,  20,  24);
pub const DARK_BG_2:     Color32 = Color32::from_rgb( 28,  28,  34);
pub const DARK_BG_3:     Color32 = Color32::from_rgb( 38,  38,  46);

pub const DARK_TEXT:     Color32 = Color32::from_rgb(220, 220, 230);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(120, 120, 138);
pub const DARK_BORDER:   Color32 = Color32::from_rgb( 55,  55,  68);

/// Drop shadow under every comment.
pub const DANMAKU_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 200);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing   = egui::vec2(6.0, 5.0);
    style.spacing.window_margin  = egui::Margin::same(10);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    let cr = egui::CornerRadius::same(4);

    let mut v = Visuals::dark();
    v.panel_fill        = DARK_BG_1;
    v.window_fill       = DARK_BG_2;
    v.faint_bg_color    = DARK_BG_0;
    v.extreme_bg_color  = DARK_BG_0;
    v.window_stroke     = Stroke::new(1.0, DARK_BORDER);

    v.selection.bg_fill = ACCENT_DIM;
    v.selection.stroke  = Stroke::new(1.0, ACCENT);

    v.widgets.inactive.bg_fill       = DARK_BG_3;
    v.widgets.inactive.bg_stroke     = Stroke::new(1.0, DARK_BORDER);
    v.widgets.inactive.fg_stroke     = Stroke::new(1.0, DARK_TEXT);
    v.widgets.inactive.corner_radius = cr;

    v.widgets.hovered.bg_stroke      = Stroke::new(1.0, ACCENT_DIM);
    v.widgets.hovered.fg_stroke      = Stroke::new(1.5, ACCENT_HOVER);
    v.widgets.hovered.corner_radius  = cr;

    v.widgets.active.bg_fill         = ACCENT_DIM;
    v.widgets.active.bg_stroke       = Stroke::new(1.0, ACCENT);
    v.widgets.active.fg_stroke       = Stroke::new(2.0, Color32::WHITE);
    v.widgets.active.corner_radius   = cr;

    v.override_text_color = Some(DARK_TEXT);

    ctx.set_visuals(v);
    ctx.set_style(style);
}
