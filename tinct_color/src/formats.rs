use serde::{Deserialize, Serialize};

use crate::Hsl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Hsv,
}
impl ColorFormat {
    pub fn all() -> Vec<ColorFormat> {
        vec![
            ColorFormat::Hex,
            ColorFormat::Rgb,
            ColorFormat::Hsl,
            ColorFormat::Hsv,
        ]
    }
    /// Name shown next to a copied value
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsv => "HSV",
        }
    }
    pub fn render(self, hsl: Hsl) -> String {
        match self {
            ColorFormat::Hex => hsl.to_hex().to_string(),
            ColorFormat::Rgb => hsl.to_rgb().to_string(),
            ColorFormat::Hsl => hsl.to_string(),
            ColorFormat::Hsv => hsl.to_hsv().to_string(),
        }
    }
}

/// Every display form of one selection, computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
}
impl ColorFormats {
    pub fn from_hsl(hsl: Hsl) -> ColorFormats {
        ColorFormats {
            hex: ColorFormat::Hex.render(hsl),
            rgb: ColorFormat::Rgb.render(hsl),
            hsl: ColorFormat::Hsl.render(hsl),
            hsv: ColorFormat::Hsv.render(hsl),
        }
    }
    pub fn get(&self, format: ColorFormat) -> &str {
        match format {
            ColorFormat::Hex => &self.hex,
            ColorFormat::Rgb => &self.rgb,
            ColorFormat::Hsl => &self.hsl,
            ColorFormat::Hsv => &self.hsv,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = (ColorFormat, &'_ str)> {
        ColorFormat::all()
            .into_iter()
            .map(move |format| (format, self.get(format)))
    }
}
impl From<Hsl> for ColorFormats {
    fn from(hsl: Hsl) -> ColorFormats {
        ColorFormats::from_hsl(hsl)
    }
}
