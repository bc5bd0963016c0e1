use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}, expected #rrggbb")]
    InvalidFormat(String),
}
