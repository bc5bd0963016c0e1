//! Free-function entry points over whole-number slider values.
//!
//! Numeric inputs follow the [`Hsl::new`] policy (hue wraps, saturation and
//! lightness clamp), so only [`hex_to_hsl`] can fail.

use crate::{ColorError, HexColor, Hsl, Hsv, Rgb};

pub fn hsl_to_hex(hue: i32, saturation: i32, lightness: i32) -> HexColor {
    Hsl::new(hue, saturation, lightness).to_hex()
}

pub fn hsl_to_rgb(hue: i32, saturation: i32, lightness: i32) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

pub fn hsl_to_hsv(hue: i32, saturation: i32, lightness: i32) -> Hsv {
    Hsl::new(hue, saturation, lightness).to_hsv()
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex.parse::<HexColor>().map(HexColor::to_hsl)
}
