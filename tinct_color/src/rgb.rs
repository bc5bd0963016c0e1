use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HexColor, Hsl};

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Constructor,
    From,
    Into,
    Serialize,
    Deserialize,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self)
    }
    /// Reconstructs the whole-number HSL color this RGB value was most likely
    /// rendered from.
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b] = [self.r, self.g, self.b].map(|channel| f64::from(channel) / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;
        let sum = max + min;
        let lightness = sum / 2.0;

        if diff == 0.0 {
            return Hsl::new(0, 0, percent(lightness));
        }

        let saturation = if lightness > 0.5 {
            diff / (2.0 - sum)
        } else {
            diff / sum
        };

        let hue = if max == r {
            ((g - b) / diff + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / diff + 2.0) / 6.0
        } else {
            ((r - g) / diff + 4.0) / 6.0
        };

        // a hue that rounds up to 360 wraps to 0 in Hsl::new
        Hsl::new(
            (hue * 360.0).round() as i32,
            percent(saturation),
            percent(lightness),
        )
    }
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn percent(fraction: f64) -> i32 {
    (fraction * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hsl_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
        assert_eq!(Rgb::new(255, 0, 255).to_hsl(), Hsl::new(300, 100, 50));
    }

    #[test]
    fn test_to_hsl_achromatic() {
        assert_eq!(Rgb::new(0, 0, 0).to_hsl(), Hsl::new(0, 0, 0));
        assert_eq!(Rgb::new(255, 255, 255).to_hsl(), Hsl::new(0, 0, 100));
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_to_hsl_light_and_dark_branches() {
        // lightness above one half divides by (2 - sum)
        assert_eq!(Rgb::new(255, 192, 203).to_hsl(), Hsl::new(350, 100, 88));
        assert_eq!(Rgb::new(165, 42, 42).to_hsl(), Hsl::new(0, 59, 41));
    }

    #[test]
    fn test_to_hsl_hue_rounding_up_to_360_wraps() {
        assert_eq!(Rgb::new(255, 0, 1).to_hsl(), Hsl::new(0, 100, 50));
    }

    #[test]
    fn test_tuple_conversions() {
        let rgb: Rgb = (1, 2, 3).into();
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        let (r, g, b): (u8, u8, u8) = rgb.into();
        assert_eq!((r, g, b), (1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(64, 149, 191).to_string(), "rgb(64, 149, 191)");
    }
}
