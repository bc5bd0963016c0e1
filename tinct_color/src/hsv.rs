use serde::Serialize;
use std::fmt;

/// An HSV color produced from an [`Hsl`](crate::Hsl) selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hsv {
    hue: u16,
    saturation: u8,
    value: u8,
}
impl Hsv {
    pub(crate) fn new(hue: u16, saturation: u8, value: u8) -> Hsv {
        Hsv {
            hue,
            saturation,
            value,
        }
    }
    pub fn hue(self) -> u16 {
        self.hue
    }
    pub fn saturation(self) -> u8 {
        self.saturation
    }
    pub fn value(self) -> u8 {
        self.value
    }
}
impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.hue, self.saturation, self.value)
    }
}
