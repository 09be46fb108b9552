use std::fmt;
use crate::{BigUint,BigUintRef};
use crate::core::{Limb, LimbT, BigLimbT};
use crate::error::{BigUintError, Result};

/// Decimal digits that always fit a single limb.
const DIGITS_PER_LIMB: usize = 10;

impl BigUint {

  /// Replace the value with `value / 10` and return `value % 10`.
  /// Most significant zero limbs are dropped as the value shrinks.
  pub(crate) fn div_rem_ten(&mut self) -> LimbT {
    let mut rem: BigLimbT = 0;
    for w in self.as_slice_mut().iter_mut().rev() {
      let acc = (rem << Limb::BITS) | *w as BigLimbT;
      *w  = (acc / 10) as LimbT;
      rem = acc % 10;
    }
    self.trim();
    rem as LimbT
  }

  /// Render in base 10, without leading zeros.
  pub fn try_to_decimal_string(&self) -> Result<String> {
    self.as_ref().try_to_decimal_string()
  }

}

impl BigUintRef<'_> {

  /// Render in base 10, without leading zeros.
  /// The zero value renders as `"0"`.
  pub fn try_to_decimal_string(self) -> Result<String> {
    let mut scratch = self.try_clone_uint()?;
    scratch.trim();
    if scratch.limbs() == 0 { return Ok(String::from("0")) }

    let len = DIGITS_PER_LIMB * scratch.limbs() + 1;
    let mut buf = Vec::<u8>::new();
    buf.try_reserve_exact(len)
       .map_err(|_| BigUintError::AllocText { bytes: len })?;
    buf.resize(len, 0);

    let mut i = len;
    while scratch.limbs() > 0 {
      i -= 1;
      buf[i] = b'0' + scratch.div_rem_ten() as u8;
    }

    buf.copy_within(i .., 0);
    buf.truncate(len - i);
    // only ASCII digits were written
    Ok(unsafe { String::from_utf8_unchecked(buf) })
  }
}

impl fmt::Display for BigUintRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let s = self.try_to_decimal_string().map_err(|_| fmt::Error)?;
    f.pad_integral(true, "", &s)
  }
}

impl fmt::Display for BigUint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.as_ref(), f)
  }
}

impl fmt::Debug for BigUintRef<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}

impl fmt::Debug for BigUint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.as_ref(), f)
  }
}
