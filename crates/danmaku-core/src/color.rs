// crates/danmaku-core/src/color.rs
//
// Comment colors arrive as hex strings from the comment source. Parsing never
// fails from the caller's point of view: anything unrecognised renders white.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a `0xAARRGGBB` word.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8)  as u8,
            b:  argb        as u8,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self { Rgba::WHITE }
}

/// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB`. Any other shape, or a non-hex
/// digit, yields opaque white.
///
/// ```
/// use danmaku_core::color::{parse_color, Rgba};
/// assert_eq!(parse_color("#FFF"),      Rgba::WHITE);
/// assert_eq!(parse_color("#FF0000"),   Rgba::opaque(255, 0, 0));
/// assert_eq!(parse_color("#80FF0000"), Rgba { r: 255, g: 0, b: 0, a: 0x80 });
/// assert_eq!(parse_color("red"),       Rgba::WHITE);
/// ```
pub fn parse_color(s: &str) -> Rgba {
    let Some(hex) = s.strip_prefix('#') else {
        return Rgba::WHITE;
    };
    // from_str_radix accepts a leading '+', which is not a hex digit here.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgba::WHITE;
    }

    let argb = match hex.len() {
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).map(|rgb| 0xFF00_0000 | rgb)
        }
        6 => u32::from_str_radix(hex, 16).map(|rgb| 0xFF00_0000 | rgb),
        8 => u32::from_str_radix(hex, 16),
        _ => return Rgba::WHITE,
    };

    argb.map(Rgba::from_argb).unwrap_or(Rgba::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_expands_each_digit() {
        assert_eq!(parse_color("#FFF"), Rgba::WHITE);
        assert_eq!(parse_color("#1a2"), Rgba::opaque(0x11, 0xAA, 0x22));
    }

    #[test]
    fn six_digit_is_opaque() {
        assert_eq!(parse_color("#FF0000"), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("#00ff7f"), Rgba::opaque(0, 255, 127));
    }

    #[test]
    fn eight_digit_carries_alpha_first() {
        let c = parse_color("#80FF0000");
        assert_eq!(c, Rgba { r: 255, g: 0, b: 0, a: 0x80 });
    }

    #[test]
    fn garbage_falls_back_to_white() {
        assert_eq!(parse_color("not-a-color"), Rgba::WHITE);
        assert_eq!(parse_color(""),            Rgba::WHITE);
        assert_eq!(parse_color("#"),           Rgba::WHITE);
        assert_eq!(parse_color("#12345"),      Rgba::WHITE);
        assert_eq!(parse_color("#GGGGGG"),     Rgba::WHITE);
        assert_eq!(parse_color("#+FFFFF"),     Rgba::WHITE);
        assert_eq!(parse_color("FF0000"),      Rgba::WHITE);
    }
}
