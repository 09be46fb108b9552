use crate::BigUintRef;
use crate::core::LimbT;

impl<'a> BigUintRef<'a> {

  /// Iterate over the limbs, starting with the least significant one.
  pub fn iter_limbs_lsb(self) -> std::slice::Iter<'a,LimbT> {
    self.as_slice().iter()
  }

  /// Iterate over `len` limbs from the least significant one,
  /// padding with 0 past the stored limbs.
  pub fn iter_limbs_padded(self, len: usize)
    -> impl Iterator<Item = LimbT> + 'a {
    self.iter_limbs_lsb().copied().chain(std::iter::repeat(0)).take(len)
  }
}
