//! Conversions into the `palette` crate's color types, for callers that want
//! to blend or adapt a picked color with palette's own operations.

use palette::encoding::Srgb;

use crate::{Hsl, Hsv, Rgb};

pub type Hsl64 = palette::Hsl<Srgb, f64>;
pub type Hsv64 = palette::Hsv<Srgb, f64>;

impl From<Hsl> for Hsl64 {
    fn from(hsl: Hsl) -> Hsl64 {
        Hsl64::new(
            f64::from(hsl.hue()),
            f64::from(hsl.saturation()) / 100.0,
            f64::from(hsl.lightness()) / 100.0,
        )
    }
}
impl From<Hsv> for Hsv64 {
    fn from(hsv: Hsv) -> Hsv64 {
        Hsv64::new(
            f64::from(hsv.hue()),
            f64::from(hsv.saturation()) / 100.0,
            f64::from(hsv.value()) / 100.0,
        )
    }
}
impl From<Rgb> for palette::Srgb<u8> {
    fn from(rgb: Rgb) -> palette::Srgb<u8> {
        palette::Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}
impl From<palette::Srgb<u8>> for Rgb {
    fn from(color: palette::Srgb<u8>) -> Rgb {
        Rgb::new(color.red, color.green, color.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::FromColor;

    fn assert_close(channel: f64, ours: u8) {
        assert!(
            (channel * 255.0 - f64::from(ours)).abs() <= 0.5 + 1e-6,
            "{} vs {}",
            channel * 255.0,
            ours
        );
    }

    #[test]
    fn test_hsl_agrees_with_palette() {
        for hue in (0..360).step_by(23) {
            for (saturation, lightness) in [(100, 50), (50, 50), (30, 80), (75, 15)] {
                let hsl = Hsl::new(hue, saturation, lightness);
                let ours = hsl.to_rgb();
                let theirs = palette::Srgb::<f64>::from_color(Hsl64::from(hsl));

                assert_close(theirs.red, ours.r);
                assert_close(theirs.green, ours.g);
                assert_close(theirs.blue, ours.b);
            }
        }
    }

    #[test]
    fn test_hsv_agrees_with_palette() {
        let hsl = Hsl::new(200, 50, 50);
        let from_hsv = palette::Srgb::<f64>::from_color(Hsv64::from(hsl.to_hsv()));
        let ours = hsl.to_rgb();

        // hsv components are rounded to whole percents, allow one step of slack
        assert!((from_hsv.red * 255.0 - f64::from(ours.r)).abs() < 3.0);
        assert!((from_hsv.green * 255.0 - f64::from(ours.g)).abs() < 3.0);
        assert!((from_hsv.blue * 255.0 - f64::from(ours.b)).abs() < 3.0);
    }

    #[test]
    fn test_srgb_u8_round_trip() {
        let rgb = Rgb::new(12, 34, 56);
        let srgb: palette::Srgb<u8> = rgb.into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (12, 34, 56));
        assert_eq!(Rgb::from(srgb), rgb);
    }
}
