// crates/danmaku-ui/src/helpers/color.rs

use danmaku_core::color::Rgba;
use egui::Color32;

/// Engine color → egui color. Alpha is straight in both.
pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_map_exactly() {
        assert_eq!(to_color32(Rgba::WHITE), Color32::WHITE);
        assert_eq!(to_color32(Rgba::opaque(255, 0, 0)), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn transparent_alpha_is_kept() {
        let c = to_color32(Rgba { r: 255, g: 0, b: 0, a: 0x80 });
        assert_eq!(c.a(), 0x80);
    }
}
