use std::str::FromStr;
use crate::{BigUint,BigUintRef};
use crate::core::{Limb, LimbT, BigLimbT};
use crate::error::{ParseBigUintError, Result};

impl BigUint {

  /// Convert from a `num` big integer.
  pub fn from_num(x: &num::BigUint) -> BigUint {
    BigUint::from_limbs(x.to_u32_digits())
  }

  /// `self = self * mul + add`, in place.
  fn mul_add_small(&mut self, mul: LimbT, add: LimbT) -> Result<()> {
    let mut carry = add as BigLimbT;
    for w in self.as_slice_mut() {
      let acc = (*w as BigLimbT) * (mul as BigLimbT) + carry;
      *w    = acc as LimbT;
      carry = acc >> Limb::BITS;
    }

    if carry > 0 {
      let len = self.limbs();
      self.grow_to(len + 1)?;
      self.as_slice_mut()[len] = carry as LimbT;
    }
    Ok(())
  }

}

/// Parse base 10 text, most significant digit first.
impl FromStr for BigUint {
  type Err = ParseBigUintError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() { return Err(ParseBigUintError::Empty) }

    let mut acc = BigUint::zero();
    for (position, found) in s.chars().enumerate() {
      let digit = found.to_digit(10)
                       .ok_or(ParseBigUintError::InvalidDigit { position, found })?;
      acc.mul_add_small(10, digit)?;
    }
    acc.shrink_to_fit();
    Ok(acc)
  }
}

/// Convert to a `num` big integer.
impl<'a> From<BigUintRef<'a>> for num::BigUint {
  fn from(x: BigUintRef<'a>) -> Self {
    num::BigUint::new(x.as_slice().to_vec())
  }
}

impl From<&BigUint> for num::BigUint {
  fn from(x: &BigUint) -> Self { x.as_ref().into() }
}
