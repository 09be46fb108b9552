use thiserror::Error;
use crate::core::LimbT;

/// Failures of the allocating and order-sensitive operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigUintError {
  /// Storage for the given number of limbs could not be obtained.
  #[error("failed to allocate {limbs} limbs")]
  Alloc { limbs: usize },

  /// Storage for the given number of bytes of decimal text could not be
  /// obtained.
  #[error("failed to allocate {bytes} bytes of text")]
  AllocText { bytes: usize },

  /// A subtraction whose subtrahend is greater than its minuend.
  #[error("subtrahend is greater than minuend")]
  Underflow,
}

impl BigUintError {

  /// Treat the failure as unrecoverable.
  /// Allocation failures go through the global allocation error handler,
  /// underflow panics the way primitive unsigned subtraction does.
  pub fn fatal(self) -> ! {
    match self {
      BigUintError::Alloc { limbs } => {
        let layout = std::alloc::Layout::array::<LimbT>(limbs)
                       .unwrap_or(std::alloc::Layout::new::<LimbT>());
        std::alloc::handle_alloc_error(layout)
      }
      BigUintError::AllocText { bytes } => {
        let layout = std::alloc::Layout::array::<u8>(bytes)
                       .unwrap_or(std::alloc::Layout::new::<u8>());
        std::alloc::handle_alloc_error(layout)
      }
      BigUintError::Underflow => panic!("attempt to subtract with overflow"),
    }
  }
}

/// Failures when parsing decimal text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBigUintError {
  #[error("cannot parse integer from empty string")]
  Empty,

  #[error("invalid digit {found:?} at position {position}")]
  InvalidDigit { position: usize, found: char },

  #[error(transparent)]
  Alloc(#[from] BigUintError),
}

pub type Result<T, E = BigUintError> = std::result::Result<T, E>;
