use thiserror::Error;
use biguint::BigUintError;

/// Reasons a line typed at a prompt is not a usable date.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
  /// The line is not `YYYY/MM/DD` or `YYYY/MM/DD/HH/MM/SS`.
  #[error("Invalid input!")]
  Shape,

  /// The line has the right shape but a field is out of range.
  #[error("Invalid date/time!")]
  Range,
}

#[derive(Debug, Error)]
pub enum SessionError {
  #[error("terminal i/o failed")]
  Io(#[from] std::io::Error),

  #[error("second count could not be computed")]
  Arith(#[from] BigUintError),
}
