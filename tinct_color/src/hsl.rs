use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{HexColor, Hsv, Rgb};

pub const HUE_DEGREES: i32 = 360;
pub const PERCENT_MAX: i32 = 100;

/// A color in HSL space with whole-number components.
///
/// Construction never fails: hue wraps around the color wheel into `0..360`,
/// saturation and lightness clamp into `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "HslComponents")]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}
impl Hsl {
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Hsl {
        Hsl {
            hue: wrap_hue(hue),
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }
    pub fn hue(self) -> u16 {
        self.hue
    }
    pub fn saturation(self) -> u8 {
        self.saturation
    }
    pub fn lightness(self) -> u8 {
        self.lightness
    }
    pub fn with_hue(self, hue: i32) -> Hsl {
        Hsl {
            hue: wrap_hue(hue),
            ..self
        }
    }
    pub fn with_saturation(self, saturation: i32) -> Hsl {
        Hsl {
            saturation: clamp_percent(saturation),
            ..self
        }
    }
    pub fn with_lightness(self, lightness: i32) -> Hsl {
        Hsl {
            lightness: clamp_percent(lightness),
            ..self
        }
    }
    fn normalized(self) -> (f64, f64, f64) {
        (
            f64::from(self.hue),
            f64::from(self.saturation) / 100.0,
            f64::from(self.lightness) / 100.0,
        )
    }
    pub fn to_rgb(self) -> Rgb {
        let (h, s, l) = self.normalized();
        let a = s * l.min(1.0 - l);

        // n selects the channel: 0 for red, 8 for green, 4 for blue
        let channel = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * color).round() as u8
        };

        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self.to_rgb())
    }
    pub fn to_hsv(self) -> Hsv {
        let (_, s, l) = self.normalized();
        let value = l + s * l.min(1.0 - l);
        // black has no defined saturation in HSV
        let saturation = if value == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - l / value)
        };

        Hsv::new(
            self.hue,
            (saturation * 100.0).round() as u8,
            (value * 100.0).round() as u8,
        )
    }
}
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

#[derive(Deserialize)]
struct HslComponents {
    hue: i32,
    saturation: i32,
    lightness: i32,
}
impl From<HslComponents> for Hsl {
    fn from(components: HslComponents) -> Hsl {
        Hsl::new(
            components.hue,
            components.saturation,
            components.lightness,
        )
    }
}

fn wrap_hue(hue: i32) -> u16 {
    hue.rem_euclid(HUE_DEGREES) as u16
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, PERCENT_MAX) as u8
}
