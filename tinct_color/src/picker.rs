use crate::{ColorFormats, ColorHistory, HexColor, Hsl};

pub fn default_color() -> Hsl {
    Hsl::new(200, 50, 50)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    SetHue(i32),
    SetSaturation(i32),
    SetLightness(i32),
    /// Save the current color to the history
    Save,
    /// Replace the current color with the reconstruction of a hex color
    Load(HexColor),
}

/// Something worth telling the user after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerNotice {
    Saved(HexColor),
    Loaded(Hsl),
}

/// The whole of a picker's interactive state: the slider selection and the
/// saved colors. It is owned by the caller and threaded through [`apply`].
///
/// [`apply`]: PickerState::apply
#[derive(Debug, Clone)]
pub struct PickerState {
    color: Hsl,
    history: ColorHistory,
}
impl PickerState {
    pub fn new(color: Hsl, history_capacity: usize) -> PickerState {
        PickerState {
            color,
            history: ColorHistory::new(history_capacity),
        }
    }
    pub fn color(&self) -> Hsl {
        self.color
    }
    pub fn history(&self) -> &ColorHistory {
        &self.history
    }
    pub fn formats(&self) -> ColorFormats {
        ColorFormats::from_hsl(self.color)
    }
    pub fn apply(mut self, event: PickerEvent) -> (PickerState, Option<PickerNotice>) {
        log::debug!("picker event {:?} on {}", event, self.color);

        let notice = match event {
            PickerEvent::SetHue(hue) => {
                self.color = self.color.with_hue(hue);
                None
            }
            PickerEvent::SetSaturation(saturation) => {
                self.color = self.color.with_saturation(saturation);
                None
            }
            PickerEvent::SetLightness(lightness) => {
                self.color = self.color.with_lightness(lightness);
                None
            }
            PickerEvent::Save => {
                let hex = self.color.to_hex();
                if self.history.save(hex) {
                    Some(PickerNotice::Saved(hex))
                } else {
                    None
                }
            }
            PickerEvent::Load(hex) => {
                self.color = hex.to_hsl();
                Some(PickerNotice::Loaded(self.color))
            }
        };

        (self, notice)
    }
}
impl Default for PickerState {
    fn default() -> PickerState {
        PickerState {
            color: default_color(),
            history: ColorHistory::default(),
        }
    }
}
