// Unsigned integers of dynamic size

use crate::error::{BigUintError, Result};

pub type LimbT    = u32;
pub type BigLimbT = u64;
pub struct Limb();

impl Limb {
  /// The number of bits in a limb.
  pub const BITS: usize = LimbT::BITS as usize;

  /// One past the largest limb value, as a wide limb.
  pub const BASE: BigLimbT = 1 << Limb::BITS;
}

/// An arbitrary precision unsigned integer.
///
///   * The less significant limbs are stored in the elements with lower
///     indexes (little endian).
///   * The number of limbs is the length of the vector; the zero value
///     has no limbs and owns no storage.
#[derive(Default)]
pub struct BigUint {
  limbs: Vec<LimbT>
}

/// A borrowed view of the limbs of a `BigUint`.
#[derive(Clone,Copy)]
pub struct BigUintRef<'a> {
  limbs: &'a [LimbT]
}

/// Reserve exactly `len` limbs, reporting failure instead of aborting.
pub(crate) fn try_vec(len: usize) -> Result<Vec<LimbT>> {
  let mut out = Vec::new();
  out.try_reserve_exact(len).map_err(|_| {
    tracing::warn!(limbs = len, "limb allocation failed");
    BigUintError::Alloc { limbs: len }
  })?;
  Ok(out)
}

/// The number of limbs left once the most significant zeros are dropped.
pub(crate) fn used_limbs(limbs: &[LimbT]) -> usize {
  limbs.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

impl BigUint {

  /// The value 0.
  pub const fn zero() -> BigUint { BigUint { limbs: Vec::new() } }

  /// Create a 0 initialized value with the given number of limbs.
  /// A length of 0 gives the zero value, which owns no storage.
  pub fn try_zeroed(len: usize) -> Result<BigUint> {
    let mut limbs = try_vec(len)?;
    limbs.resize(len, 0);
    Ok(BigUint { limbs })
  }

  /// Adopt the given limbs (least significant first).
  /// The result is normalized.
  pub fn from_limbs(limbs: Vec<LimbT>) -> BigUint {
    let mut result = BigUint { limbs };
    result.shrink_to_fit();
    result
  }

  /// Like `from_limbs` but keeps any most significant zero limbs.
  pub(crate) fn from_raw_limbs(limbs: Vec<LimbT>) -> BigUint {
    BigUint { limbs }
  }

  /// Copy the value into independently owned storage.
  pub fn try_clone(&self) -> Result<BigUint> {
    let mut limbs = try_vec(self.limbs())?;
    limbs.extend_from_slice(&self.limbs);
    Ok(BigUint { limbs })
  }

  /// Free the storage and reset to the zero value.
  pub fn release(&mut self) {
    self.limbs = Vec::new();
  }

  /// Make sure the value has at least `len` limbs.
  /// New limbs are 0, so the magnitude does not change.
  /// On failure the value is left as it was.
  pub fn grow_to(&mut self, len: usize) -> Result<()> {
    let have = self.limbs();
    if have >= len { return Ok(()) }

    tracing::trace!(from = have, to = len, "growing limb storage");
    self.limbs.try_reserve_exact(len - have).map_err(|_| {
      tracing::warn!(limbs = len, "limb storage growth failed");
      BigUintError::Alloc { limbs: len }
    })?;
    self.limbs.resize(len, 0);
    Ok(())
  }

  /// Drop the most significant zero limbs and release unused storage.
  /// If every limb is 0 the storage is freed entirely.
  pub fn shrink_to_fit(&mut self) {
    let used = used_limbs(&self.limbs);
    if used == 0 {
      self.release();
      return
    }
    self.limbs.truncate(used);
    self.limbs.shrink_to_fit();
  }

  /// Drop the most significant zero limbs, keeping the storage.
  pub(crate) fn trim(&mut self) {
    let used = used_limbs(&self.limbs);
    self.limbs.truncate(used);
  }

  /// How many limbs are stored.
  pub fn limbs(&self) -> usize { self.limbs.len() }

  /// Is this the value 0 (regardless of stored zero limbs).
  pub fn is_zero(&self) -> bool { self.as_ref().is_zero() }

  /// Gain access to the underlying limbs, least significant first.
  pub fn as_slice(&self) -> &[LimbT] { &self.limbs }

  pub(crate) fn as_slice_mut(&mut self) -> &mut [LimbT] { &mut self.limbs }

  /// Borrow the value for arithmetic.
  pub fn as_ref(&self) -> BigUintRef<'_> { BigUintRef { limbs: &self.limbs } }

}

impl Clone for BigUint {
  fn clone(&self) -> Self {
    self.try_clone().unwrap_or_else(|err| err.fatal())
  }
}

impl<'a> BigUintRef<'a> {

  /// View a limb slice, least significant first.
  pub fn new(limbs: &'a [LimbT]) -> Self { BigUintRef { limbs } }

  /// How many limbs are in the view.
  pub fn limbs(self) -> usize { self.limbs.len() }

  /// The underlying limbs.
  pub fn as_slice(self) -> &'a [LimbT] { self.limbs }

  /// The limb at the given index, or 0 past the end.
  pub fn limb(self, i: usize) -> LimbT {
    self.limbs.get(i).copied().unwrap_or(0)
  }

  pub fn is_zero(self) -> bool { self.limbs.iter().all(|&w| w == 0) }

  /// The number of limbs in the normalized form of the value.
  pub fn used(self) -> usize { used_limbs(self.limbs) }

  /// Make an owned copy of the value.
  pub fn try_clone_uint(self) -> Result<BigUint> {
    let mut limbs = try_vec(self.limbs())?;
    limbs.extend_from_slice(self.limbs);
    Ok(BigUint { limbs })
  }
}

impl<'a> From<&'a BigUint> for BigUintRef<'a> {
  fn from(x: &'a BigUint) -> Self { x.as_ref() }
}
