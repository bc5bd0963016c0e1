//! Whole-number color conversions for a slider-driven color picker, plus the
//! picker's saved-color history and quick swatches.

pub mod convert;
mod error;
pub mod formats;
mod hex;
pub mod history;
mod hsl;
mod hsv;
pub mod interop;
pub mod picker;
mod rgb;
pub mod swatch;
mod utils;

pub use convert::{hex_to_hsl, hsl_to_hex, hsl_to_hsv, hsl_to_rgb};
pub use error::ColorError;
pub use formats::{ColorFormat, ColorFormats};
pub use hex::HexColor;
pub use history::{ColorHistory, DEFAULT_HISTORY_CAPACITY};
pub use hsl::{Hsl, HUE_DEGREES, PERCENT_MAX};
pub use hsv::Hsv;
pub use picker::{PickerEvent, PickerNotice, PickerState};
pub use rgb::Rgb;
pub use swatch::{Swatches, QUICK_COLORS};
