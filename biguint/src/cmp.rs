use std::cmp::Ordering;
use std::hash::{Hash,Hasher};
use crate::{BigUint,BigUintRef};

impl<'a> BigUintRef<'a> {

  /// Compare magnitudes. Missing limbs count as 0,
  /// so most significant zero limbs do not matter.
  pub fn compare(self, other: BigUintRef<'_>) -> Ordering {
    let len = self.limbs().max(other.limbs());
    for i in (0 .. len).rev() {
      let lhs = self.limb(i);
      let rhs = other.limb(i);
      if lhs == rhs { continue }
      return if lhs < rhs { Ordering::Less } else { Ordering::Greater }
    }
    Ordering::Equal
  }

  /// Strictly greater magnitude.
  pub fn greater_than(self, other: BigUintRef<'_>) -> bool {
    self.compare(other) == Ordering::Greater
  }

  pub fn equal(self, other: BigUintRef<'_>) -> bool {
    self.compare(other) == Ordering::Equal
  }

}

impl BigUint {
  pub fn greater_than(&self, other: &BigUint) -> bool {
    self.as_ref().greater_than(other.as_ref())
  }
}

impl PartialEq for BigUintRef<'_> {
  fn eq(&self, other: &BigUintRef<'_>) -> bool { self.equal(*other) }
}

impl PartialOrd for BigUintRef<'_> {
  fn partial_cmp(&self, other: &BigUintRef<'_>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Eq for BigUintRef<'_> {}

impl Ord for BigUintRef<'_> {
  fn cmp(&self, other: &BigUintRef<'_>) -> Ordering { self.compare(*other) }
}

impl Hash for BigUintRef<'_> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_slice()[.. self.used()].hash(state)
  }
}

impl PartialEq for BigUint {
  fn eq(&self, other: &Self) -> bool { self.as_ref() == other.as_ref() }
}

impl PartialOrd for BigUint {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Eq for BigUint {}

impl Ord for BigUint {
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_ref().cmp(&other.as_ref())
  }
}

impl Hash for BigUint {
  fn hash<H: Hasher>(&self, state: &mut H) { self.as_ref().hash(state) }
}
