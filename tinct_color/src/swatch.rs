use derive_more::{Constructor, From};
use itertools::Itertools;

use crate::{HexColor, Hsl, Rgb, HUE_DEGREES};

const fn swatch(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from_rgb(Rgb { r, g, b })
}

/// Quick colors offered next to the sliders.
pub const QUICK_COLORS: [HexColor; 12] = [
    swatch(0xFF, 0x00, 0x00),
    swatch(0x00, 0xFF, 0x00),
    swatch(0x00, 0x00, 0xFF),
    swatch(0xFF, 0xFF, 0x00),
    swatch(0xFF, 0x00, 0xFF),
    swatch(0x00, 0xFF, 0xFF),
    swatch(0xFF, 0xA5, 0x00),
    swatch(0x80, 0x00, 0x80),
    swatch(0xFF, 0xC0, 0xCB),
    swatch(0xA5, 0x2A, 0x2A),
    swatch(0x80, 0x80, 0x80),
    swatch(0x00, 0x00, 0x00),
];

#[derive(Debug, Clone, PartialEq, Eq, Constructor, From)]
pub struct Swatches(Vec<HexColor>);
impl Swatches {
    pub fn get(&self, idx: usize) -> Option<HexColor> {
        self.0.get(idx).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &'_ HexColor> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl Default for Swatches {
    fn default() -> Swatches {
        Swatches(QUICK_COLORS.to_vec())
    }
}

const GRADIENT_STEP_DEGREES: usize = 60;

/// Stops for a hue slider track at the given saturation and lightness, from
/// 0 to 360 degrees inclusive.
pub fn hue_gradient(saturation: i32, lightness: i32) -> Vec<Hsl> {
    (0..=360)
        .step_by(GRADIENT_STEP_DEGREES)
        .map(|hue| Hsl::new(hue, saturation, lightness))
        .collect()
}

/// The hue track as a CSS `linear-gradient`. The closing stop is written as
/// 360 degrees even though it names the same color as 0.
pub fn css_hue_gradient(saturation: i32, lightness: i32) -> String {
    let gradient = hue_gradient(saturation, lightness);
    let last_idx = gradient.len() - 1;

    let stops = gradient.iter().enumerate().map(|(idx, stop)| {
        let hue = if idx == last_idx {
            HUE_DEGREES
        } else {
            i32::from(stop.hue())
        };
        format!(
            "hsl({}, {}%, {}%)",
            hue,
            stop.saturation(),
            stop.lightness()
        )
    });

    format!("linear-gradient(to right, {})", stops.format(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_colors_load_as_expected() {
        let loaded: Vec<Hsl> = Swatches::default().iter().map(|hex| hex.to_hsl()).collect();
        assert_eq!(
            loaded,
            vec![
                Hsl::new(0, 100, 50),
                Hsl::new(120, 100, 50),
                Hsl::new(240, 100, 50),
                Hsl::new(60, 100, 50),
                Hsl::new(300, 100, 50),
                Hsl::new(180, 100, 50),
                Hsl::new(39, 100, 50),
                Hsl::new(300, 100, 25),
                Hsl::new(350, 100, 88),
                Hsl::new(0, 59, 41),
                Hsl::new(0, 0, 50),
                Hsl::new(0, 0, 0),
            ]
        );
    }

    #[test]
    fn test_swatch_lookup() {
        let swatches = Swatches::default();
        assert_eq!(swatches.len(), 12);
        assert_eq!(swatches.get(0).map(|hex| hex.to_string()), Some("#ff0000".to_owned()));
        assert_eq!(swatches.get(12), None);

        let custom = Swatches::new(vec!["#123456".parse().unwrap()]);
        assert_eq!(custom.len(), 1);
        assert!(!custom.is_empty());
    }

    #[test]
    fn test_hue_gradient_stops() {
        let stops = hue_gradient(50, 50);
        assert_eq!(stops.len(), 7);
        assert_eq!(stops[1], Hsl::new(60, 50, 50));
        assert_eq!(stops[6], stops[0]);
        assert_eq!(
            stops.iter().map(|hsl| hsl.to_hex().to_string()).collect::<Vec<_>>(),
            ["#bf4040", "#bfbf40", "#40bf40", "#40bfbf", "#4040bf", "#bf40bf", "#bf4040"]
        );
    }

    #[test]
    fn test_css_hue_gradient() {
        assert_eq!(
            css_hue_gradient(80, 150),
            "linear-gradient(to right, hsl(0, 80%, 100%), hsl(60, 80%, 100%), \
             hsl(120, 80%, 100%), hsl(180, 80%, 100%), hsl(240, 80%, 100%), \
             hsl(300, 80%, 100%), hsl(360, 80%, 100%))"
        );
    }

    #[test]
    fn test_css_hue_gradient_renders_the_gradient_stops() {
        let css = css_hue_gradient(40, 70);
        let stops = hue_gradient(40, 70);

        // every stop but the closing one prints exactly as its Hsl display
        for stop in &stops[..stops.len() - 1] {
            assert!(css.contains(&stop.to_string()), "{} missing from {}", stop, css);
        }
        assert!(css.ends_with("hsl(360, 40%, 70%))"));
        assert_eq!(css.matches("hsl(").count(), stops.len());
    }
}
