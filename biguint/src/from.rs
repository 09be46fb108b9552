use crate::BigUint;
use crate::core::{Limb,LimbT};

impl BigUint {

  /// A single limb value.
  pub fn from_u32(value: u32) -> BigUint {
    BigUint::from_raw_limbs(vec![value])
  }

  /// At most two limbs, normalized.
  pub fn from_u64(value: u64) -> BigUint {
    let lo = value as LimbT;
    let hi = (value >> Limb::BITS) as LimbT;
    BigUint::from_limbs(vec![lo, hi])
  }

}

impl From<u32> for BigUint {
  fn from(value: u32) -> Self { BigUint::from_u32(value) }
}

impl From<u64> for BigUint {
  fn from(value: u64) -> Self { BigUint::from_u64(value) }
}
