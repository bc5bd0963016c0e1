use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ColorError, Hsl, Rgb};

/// A 24-bit color written as `#rrggbb`.
///
/// Parsing accepts upper or lower case digits; rendering is always lower case,
/// so two equal colors always render to the same string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);
impl HexColor {
    pub const fn from_rgb(rgb: Rgb) -> HexColor {
        HexColor(rgb)
    }
    pub fn to_rgb(self) -> Rgb {
        self.0
    }
    pub fn to_hsl(self) -> Hsl {
        self.0.to_hsl()
    }
}
impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<HexColor, ColorError> {
        let invalid = || ColorError::InvalidFormat(s.to_owned());

        let digits = s
            .strip_prefix('#')
            .filter(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel = |idx: usize| u8::from_str_radix(&digits[idx..idx + 2], 16).map_err(|_| invalid());

        Ok(HexColor(Rgb::new(channel(0)?, channel(2)?, channel(4)?)))
    }
}
impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<HexColor, ColorError> {
        s.parse()
    }
}
impl From<HexColor> for String {
    fn from(hex: HexColor) -> String {
        hex.to_string()
    }
}
impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
