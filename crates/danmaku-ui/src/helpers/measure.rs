// crates/danmaku-ui/src/helpers/measure.rs
//
// TextMeasure backed by egui's font system.
//
// The engine works in physical pixels; egui lays text out in points. Widths
// are laid out at the configured font size in points and scaled by
// pixels_per_point on the way out.

use danmaku_core::allocator::TextMeasure;
use egui::epaint::text::Fonts;
use egui::{Color32, FontId};

pub struct EguiMeasure<'a> {
    fonts:            &'a Fonts,
    font:             FontId,
    pixels_per_point: f32,
}

impl<'a> EguiMeasure<'a> {
    pub fn new(fonts: &'a Fonts, font_size_points: f32, pixels_per_point: f32) -> Self {
        Self {
            fonts,
            font: FontId::proportional(font_size_points),
            pixels_per_point,
        }
    }
}

impl TextMeasure for EguiMeasure<'_> {
    fn text_width(&mut self, text: &str) -> f32 {
        // Measurement color is irrelevant to width; white matches the paint pass.
        let galley = self.fonts.layout_no_wrap(text.to_owned(), self.font.clone(), Color32::WHITE);
        galley.size().x * self.pixels_per_point
    }
}
