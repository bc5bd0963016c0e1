use async_std::io::{self, BufReader};
use async_std::prelude::*;
use itertools::Itertools;
use std::str::FromStr;
use thiserror::Error;

use tinct_color::{
    swatch::css_hue_gradient, ColorError, ColorFormats, HexColor, PickerEvent, PickerNotice,
    PickerState, Swatches,
};

const HELP: &str = "\
commands:
  hue N        set hue in degrees (wraps around 360)
  sat N        set saturation percent (clamped to 0..=100)
  light N      set lightness percent (clamped to 0..=100)
  save         add the current color to the history
  load #HEX    load a hex color
  recall N     load the Nth saved color (1 is the most recent)
  swatch N     load the Nth quick color
  history      list saved colors
  swatches     list quick colors
  show         print the current color in every format
  gradient     print the hue slider gradient as CSS
  help         print this message
  quit         leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Hue(i32),
    Saturation(i32),
    Lightness(i32),
    Save,
    Load(HexColor),
    Recall(usize),
    Swatch(usize),
    History,
    Swatches,
    Show,
    Gradient,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{command}` takes {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("no saved color at position {0}")]
    NoSavedColor(usize),
    #[error("no quick color at position {0}")]
    NoSwatch(usize),
}

fn number<T: FromStr>(arg: &str) -> Result<T, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_owned()))
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<SessionCommand, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (name.as_str(), args.as_slice()) {
            ("hue" | "h", [n]) => SessionCommand::Hue(number(n)?),
            ("sat" | "s", [n]) => SessionCommand::Saturation(number(n)?),
            ("light" | "l", [n]) => SessionCommand::Lightness(number(n)?),
            ("save", []) => SessionCommand::Save,
            ("load", [hex]) => SessionCommand::Load(hex.parse()?),
            ("recall", [n]) => SessionCommand::Recall(number(n)?),
            ("swatch", [n]) => SessionCommand::Swatch(number(n)?),
            ("history", []) => SessionCommand::History,
            ("swatches", []) => SessionCommand::Swatches,
            ("show", []) => SessionCommand::Show,
            ("gradient", []) => SessionCommand::Gradient,
            ("help" | "?", []) => SessionCommand::Help,
            ("quit" | "exit" | "q", []) => SessionCommand::Quit,

            ("hue" | "h", _) => return Err(bad_arguments("hue", "one number")),
            ("sat" | "s", _) => return Err(bad_arguments("sat", "one number")),
            ("light" | "l", _) => return Err(bad_arguments("light", "one number")),
            ("load", _) => return Err(bad_arguments("load", "one #rrggbb color")),
            ("recall", _) => return Err(bad_arguments("recall", "one position")),
            ("swatch", _) => return Err(bad_arguments("swatch", "one position")),
            ("save", _) => return Err(bad_arguments("save", "no arguments")),
            ("history", _) => return Err(bad_arguments("history", "no arguments")),
            ("swatches", _) => return Err(bad_arguments("swatches", "no arguments")),
            ("show", _) => return Err(bad_arguments("show", "no arguments")),
            ("gradient", _) => return Err(bad_arguments("gradient", "no arguments")),
            ("help" | "?", _) => return Err(bad_arguments("help", "no arguments")),
            ("quit" | "exit" | "q", _) => return Err(bad_arguments("quit", "no arguments")),
            _ => return Err(CommandError::Unknown(line.trim().to_owned())),
        };

        Ok(command)
    }
}

fn bad_arguments(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::BadArguments { command, expected }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}
impl Reply {
    fn lines(lines: Vec<String>) -> Reply {
        Reply {
            lines,
            flow: Flow::Continue,
        }
    }
    fn quit() -> Reply {
        Reply {
            lines: Vec::new(),
            flow: Flow::Quit,
        }
    }
}

pub fn format_lines(formats: &ColorFormats) -> Vec<String> {
    formats
        .iter()
        .map(|(format, value)| format!("{:<4}{}", format.label(), value))
        .collect()
}

pub fn numbered_lines<'a>(colors: impl Iterator<Item = &'a HexColor>) -> Vec<String> {
    colors
        .enumerate()
        .map(|(idx, hex)| format!("{:>2}  {}  {}", idx + 1, hex, hex.to_hsl()))
        .collect()
}

/// An interactive picker: owns the picker state and the quick colors it can
/// load from.
#[derive(Debug, Default)]
pub struct Session {
    state: PickerState,
    swatches: Swatches,
}
impl Session {
    pub fn new(state: PickerState, swatches: Swatches) -> Session {
        Session { state, swatches }
    }
    pub fn state(&self) -> &PickerState {
        &self.state
    }
    fn apply(&mut self, event: PickerEvent) -> Vec<String> {
        let (state, notice) = std::mem::take(&mut self.state).apply(event);
        self.state = state;

        match notice {
            Some(PickerNotice::Saved(hex)) => vec![format!("saved {}", hex)],
            Some(PickerNotice::Loaded(hsl)) => vec![format!("loaded {}", hsl)],
            None => Vec::new(),
        }
    }
    fn apply_and_show(&mut self, event: PickerEvent) -> Vec<String> {
        let mut lines = self.apply(event);
        lines.extend(format_lines(&self.state.formats()));
        lines
    }
    pub fn handle(&mut self, command: SessionCommand) -> Result<Reply, CommandError> {
        log::debug!("session command {:?}", command);

        let lines = match command {
            SessionCommand::Hue(hue) => self.apply_and_show(PickerEvent::SetHue(hue)),
            SessionCommand::Saturation(saturation) => {
                self.apply_and_show(PickerEvent::SetSaturation(saturation))
            }
            SessionCommand::Lightness(lightness) => {
                self.apply_and_show(PickerEvent::SetLightness(lightness))
            }
            SessionCommand::Save => {
                let lines = self.apply(PickerEvent::Save);
                if lines.is_empty() {
                    vec![format!("{} is already saved", self.state.color().to_hex())]
                } else {
                    lines
                }
            }
            SessionCommand::Load(hex) => self.apply_and_show(PickerEvent::Load(hex)),
            SessionCommand::Recall(position) => {
                let hex = position
                    .checked_sub(1)
                    .and_then(|idx| self.state.history().get(idx))
                    .ok_or(CommandError::NoSavedColor(position))?;
                self.apply_and_show(PickerEvent::Load(hex))
            }
            SessionCommand::Swatch(position) => {
                let hex = position
                    .checked_sub(1)
                    .and_then(|idx| self.swatches.get(idx))
                    .ok_or(CommandError::NoSwatch(position))?;
                self.apply_and_show(PickerEvent::Load(hex))
            }
            SessionCommand::History => {
                if self.state.history().is_empty() {
                    vec!["no saved colors".to_owned()]
                } else {
                    numbered_lines(self.state.history().iter())
                }
            }
            SessionCommand::Swatches => numbered_lines(self.swatches.iter()),
            SessionCommand::Show => format_lines(&self.state.formats()),
            SessionCommand::Gradient => {
                let color = self.state.color();
                vec![css_hue_gradient(
                    i32::from(color.saturation()),
                    i32::from(color.lightness()),
                )]
            }
            SessionCommand::Help => HELP.lines().map(str::to_owned).collect(),
            SessionCommand::Quit => return Ok(Reply::quit()),
        };

        Ok(Reply::lines(lines))
    }
    /// Feeds one line of input through the session.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, CommandError> {
        line.parse()
            .and_then(|command| self.handle(command))
    }
}

pub async fn run(mut session: Session) -> io::Result<()> {
    println!("{}", format_lines(&session.state().formats()).iter().join("\n"));

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Ok(reply) => {
                for output in reply.lines {
                    println!("{}", output);
                }
                if reply.flow == Flow::Quit {
                    break;
                }
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    log::debug!(
        "session ended with {} saved colors",
        session.state().history().len()
    );
    Ok(())
}
