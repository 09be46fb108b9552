use crate::{BigUint,BigUintRef};
use crate::core::{Limb, LimbT, BigLimbT};
use crate::error::{BigUintError, Result};

/// Add `carry` into `out` starting at limb `from`, rippling upwards.
/// Returns whatever carry falls off the end.
fn add_carry(out: &mut [LimbT], from: usize, mut carry: BigLimbT) -> BigLimbT {
  for w in &mut out[from ..] {
    if carry == 0 { break }
    let acc = *w as BigLimbT + carry;
    *w    = acc as LimbT;
    carry = acc >> Limb::BITS;
  }
  carry
}

impl<'a> BigUintRef<'a> {

  /// Sum of two values.
  pub fn try_add(self, other: BigUintRef<'_>) -> Result<BigUint> {
    let len = self.limbs().max(other.limbs());
    let mut result = BigUint::try_zeroed(len)?;

    let mut carry: BigLimbT = 0;
    for ((out,x),y) in result.as_slice_mut().iter_mut()
                             .zip(self.iter_limbs_padded(len))
                             .zip(other.iter_limbs_padded(len)) {
      let acc = x as BigLimbT + y as BigLimbT + carry;
      *out  = acc as LimbT;
      carry = acc >> Limb::BITS;
    }

    if carry > 0 {
      result.grow_to(len + 1)?;
      result.as_slice_mut()[len] = carry as LimbT;
    }

    result.shrink_to_fit();
    Ok(result)
  }

  /// Difference of two values.
  /// Fails with `Underflow` if `other` is greater than `self`.
  pub fn try_sub(self, other: BigUintRef<'_>) -> Result<BigUint> {
    if other.greater_than(self) { return Err(BigUintError::Underflow) }

    let len = self.limbs();
    let mut result = BigUint::try_zeroed(len)?;

    let mut borrow: BigLimbT = 0;
    for ((out,x),y) in result.as_slice_mut().iter_mut()
                             .zip(self.iter_limbs_lsb())
                             .zip(other.iter_limbs_padded(len)) {
      let x = *x as BigLimbT;
      let y = y as BigLimbT + borrow;
      if x < y {
        *out   = (x + Limb::BASE - y) as LimbT;
        borrow = 1;
      } else {
        *out   = (x - y) as LimbT;
        borrow = 0;
      }
    }
    debug_assert_eq!(borrow, 0);

    result.shrink_to_fit();
    Ok(result)
  }

  /// Difference of two values, or `None` if it would be negative.
  pub fn checked_sub(self, other: BigUintRef<'_>) -> Option<BigUint> {
    match self.try_sub(other) {
      Ok(r) => Some(r),
      Err(BigUintError::Underflow) => None,
      Err(err) => err.fatal()
    }
  }

  /// Product of two values (schoolbook).
  pub fn try_mul(self, other: BigUintRef<'_>) -> Result<BigUint> {
    let ws1 = self.as_slice();
    let ws2 = other.as_slice();
    let mut result = BigUint::try_zeroed(ws1.len() + ws2.len())?;
    let out = result.as_slice_mut();

    for (i,&x) in ws1.iter().enumerate() {
      if x == 0 { continue }

      let mut carry: BigLimbT = 0;
      for (j,&y) in ws2.iter().enumerate() {
        let acc = (x as BigLimbT) * (y as BigLimbT)
                + out[i + j] as BigLimbT
                + carry;
        out[i + j] = acc as LimbT;
        carry      = acc >> Limb::BITS;
      }

      // The final carry may itself overflow the limb above the row.
      let lost = add_carry(out, i + ws2.len(), carry);
      debug_assert_eq!(lost, 0);
    }

    result.shrink_to_fit();
    Ok(result)
  }

}

impl BigUint {
  pub fn try_add(&self, other: &BigUint) -> Result<BigUint> {
    self.as_ref().try_add(other.as_ref())
  }

  pub fn try_sub(&self, other: &BigUint) -> Result<BigUint> {
    self.as_ref().try_sub(other.as_ref())
  }

  pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
    self.as_ref().checked_sub(other.as_ref())
  }

  pub fn try_mul(&self, other: &BigUint) -> Result<BigUint> {
    self.as_ref().try_mul(other.as_ref())
  }
}


// Operators treat allocation failure as fatal and panic on underflow.
macro_rules! binop {
  ($tr:ident, $method:ident, $try:ident) => {

    impl<'a, 'b> std::ops::$tr<BigUintRef<'b>> for BigUintRef<'a> {
      type Output = BigUint;

      #[inline(always)]
      fn $method(self, other: BigUintRef<'b>) -> Self::Output {
        self.$try(other).unwrap_or_else(|err| err.fatal())
      }
    }

    impl<'a, 'b> std::ops::$tr<&'b BigUint> for &'a BigUint {
      type Output = BigUint;

      #[inline(always)]
      fn $method(self, other: &'b BigUint) -> Self::Output {
        std::ops::$tr::$method(self.as_ref(), other.as_ref())
      }
    }

    impl<'b> std::ops::$tr<&'b BigUint> for BigUint {
      type Output = BigUint;

      #[inline(always)]
      fn $method(self, other: &'b BigUint) -> Self::Output {
        std::ops::$tr::$method(self.as_ref(), other.as_ref())
      }
    }

    impl std::ops::$tr<BigUint> for BigUint {
      type Output = BigUint;

      #[inline(always)]
      fn $method(self, other: BigUint) -> Self::Output {
        std::ops::$tr::$method(self.as_ref(), other.as_ref())
      }
    }
  }
}

binop!(Add, add, try_add);
binop!(Sub, sub, try_sub);
binop!(Mul, mul, try_mul);

impl std::ops::AddAssign<&BigUint> for BigUint {
  fn add_assign(&mut self, rhs: &BigUint) {
    *self = self.as_ref() + rhs.as_ref()
  }
}

impl std::ops::SubAssign<&BigUint> for BigUint {
  fn sub_assign(&mut self, rhs: &BigUint) {
    *self = self.as_ref() - rhs.as_ref()
  }
}

impl std::ops::MulAssign<&BigUint> for BigUint {
  fn mul_assign(&mut self, rhs: &BigUint) {
    *self = self.as_ref() * rhs.as_ref()
  }
}


#[cfg(test)]
pub mod test {
  use crate::BigUint;
  use crate::error::BigUintError;
  use crate::proptest::*;
  use rand::random;

  fn n(x: u32) -> BigUint { BigUint::from_u32(x) }

  #[test]
  fn add_carry_makes_new_limb() {
    let r = n(u32::MAX).try_add(&n(1)).unwrap();
    assert_eq!(r.as_slice(), &[0, 1]);
    assert_eq!(r.to_string(), "4294967296");
  }

  #[test]
  fn add_is_normalized() {
    let a = BigUint::from_raw_limbs(vec![1, 0, 0]);
    let b = BigUint::from_raw_limbs(vec![2, 0]);
    assert_eq!(a.try_add(&b).unwrap().as_slice(), &[3]);
    assert_eq!(BigUint::zero().try_add(&BigUint::zero()).unwrap().limbs(), 0);
  }

  #[test]
  fn sub_simple() {
    assert_eq!(n(100).try_sub(&n(1)).unwrap().to_string(), "99");
    assert_eq!(n(5).try_sub(&n(5)).unwrap().limbs(), 0);
  }

  #[test]
  fn sub_borrows_across_limbs() {
    let a = BigUint::from_limbs(vec![0, 0, 1]);
    let r = a.try_sub(&n(1)).unwrap();
    assert_eq!(r.as_slice(), &[u32::MAX, u32::MAX]);
  }

  #[test]
  fn sub_underflow_is_rejected() {
    assert_eq!(n(1).try_sub(&n(2)).unwrap_err(), BigUintError::Underflow);
    assert!(n(1).checked_sub(&n(2)).is_none());
    let short = BigUint::from_raw_limbs(vec![3]);
    let long  = BigUint::from_raw_limbs(vec![3, 0, 0]);
    assert_eq!(short.try_sub(&long).unwrap().limbs(), 0);
  }

  #[test]
  #[should_panic(expected = "attempt to subtract with overflow")]
  fn sub_operator_panics_on_underflow() {
    let _ = n(3) - n(4);
  }

  #[test]
  fn mul_max_limbs() {
    let r = n(u32::MAX).try_mul(&n(u32::MAX)).unwrap();
    assert_eq!(r.to_string(), "18446744065119617025");
  }

  #[test]
  fn mul_by_zero_is_empty() {
    assert_eq!(n(12345).try_mul(&n(0)).unwrap().limbs(), 0);
    assert_eq!(BigUint::zero().try_mul(&n(7)).unwrap().limbs(), 0);
  }

  #[test]
  fn mul_full_carry_chain() {
    // (2^96 - 1)^2 exercises the carry above every row
    let a = BigUint::from_limbs(vec![u32::MAX; 3]);
    let (_,x) = a.sem();
    let expect = BigUint::from_num(&(&x * &x));
    assert_eq!(a.try_mul(&a).unwrap(), expect);
  }

  #[test]
  fn operators_match_fallible_forms() {
    let a = BigUint::from_u64(0xdead_beef_cafe_f00d);
    let b = n(0x1234_5678);
    assert_eq!(&a + &b, a.try_add(&b).unwrap());
    assert_eq!(&a - &b, a.try_sub(&b).unwrap());
    assert_eq!(&a * &b, a.try_mul(&b).unwrap());

    let mut c = a.clone();
    c += &b;
    c -= &b;
    c *= &b;
    assert_eq!(c, &a * &b);
  }

  #[test]
  fn add() {
    do_test(binary, |(x,y): (BigUint,BigUint)| {
      let (xr,a) = x.sem();
      let (yr,b) = y.sem();
      Some(xr + yr == BigUint::from_num(&(&a + &b)))
    })
  }

  #[test]
  fn add_skewed() {
    do_test(skewed, |(x,y): (BigUint,BigUint)| {
      let (xr,a) = x.sem();
      let (yr,b) = y.sem();
      Some(xr + yr == BigUint::from_num(&(&a + &b)))
    })
  }

  #[test]
  fn sub() {
    do_test(skewed, |(x,y): (BigUint,BigUint)| {
      let (xr,a) = x.sem();
      let (yr,b) = y.sem();
      let r = xr.try_sub(yr);
      Some(if a >= b {
        r == Ok(BigUint::from_num(&(&a - &b)))
      } else {
        r == Err(BigUintError::Underflow)
      })
    })
  }

  #[test]
  fn mul() {
    do_test(skewed, |(x,y): (BigUint,BigUint)| {
      let (xr,a) = x.sem();
      let (yr,b) = y.sem();
      let r = xr * yr;
      Some(r == BigUint::from_num(&(&a * &b)) && r.limbs() == r.as_ref().used())
    })
  }

  #[test]
  fn add_commutes() {
    do_test(skewed, |(x,y): (BigUint,BigUint)| {
      Some((&x + &y).to_string() == (&y + &x).to_string())
    })
  }

  #[test]
  fn add_identity() {
    do_test(unary, |x: BigUint| Some(&x + &BigUint::from_u32(0) == x))
  }

  #[test]
  fn add_sub_inverse() {
    do_test(skewed, |(x,y): (BigUint,BigUint)| {
      Some((&x + &y).try_sub(&y) == Ok(x.clone()))
    })
  }

  #[test]
  fn mul_distributes() {
    do_test(ternary, |(a,b,c): (BigUint,BigUint,BigUint)| {
      Some(&a * &(&b + &c) == &(&a * &b) + &(&a * &c))
    })
  }

  #[test]
  fn mul_identity_and_zero() {
    do_test(unary, |x: BigUint| {
      let one  = &x * &BigUint::from_u32(1);
      let zero = &x * &BigUint::from_u32(0);
      Some(one == x && zero == BigUint::from_u32(0) && zero.limbs() == 0)
    })
  }

  #[test]
  fn random_mul_chains() {
    let mut buf: Vec<BigUint> =
      (0 .. 20).map(|_| BigUint::from_u64(random())).collect();

    for _case in 0 .. 512 {
      let i = random::<usize>() % buf.len();
      let j = random::<usize>() % buf.len();
      let (lhs,a) = buf[i].sem();
      let (rhs,b) = buf[j].sem();
      let product = lhs * rhs;
      assert_eq!(product, BigUint::from_num(&(&a * &b)));
      buf[i] =
        if product.is_zero() || product.limbs() > 64 {
          BigUint::from_u64(random())
        } else { product }
    }
  }
}
