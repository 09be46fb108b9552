use crate::{BigUint,BigUintRef};
use crate::core::LimbT;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

/// Values are generated with up to this many limbs.
pub const MAX_LIMBS: usize = 12;

impl ValueTree for BigUint {
  type Value = BigUint;

  fn current(&self) -> BigUint { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// Values with exactly `limbs` random limbs. The most significant limbs
/// are sometimes 0 so that unnormalized operands get exercised too.
#[derive(Debug)]
pub struct BigUintStrategy { pub limbs: usize }

impl Strategy for BigUintStrategy {
  type Tree  = BigUint;
  type Value = BigUint;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    let zeros = if self.limbs > 0 && rng.next_u32() % 4 == 0 {
                  1 + rng.next_u32() as usize % self.limbs
                } else { 0 };
    let mut limbs = Vec::<LimbT>::with_capacity(self.limbs);
    for i in 0 .. self.limbs {
      limbs.push(if i + zeros >= self.limbs { 0 } else { rng.next_u32() })
    }
    Ok(BigUint::from_raw_limbs(limbs))
  }
}

impl Arbitrary for BigUint {
  type Parameters = usize;
  type Strategy   = BigUintStrategy;

  fn arbitrary_with(limbs: usize) -> Self::Strategy {
    BigUintStrategy { limbs }
  }
}



pub fn do_test<T: Arbitrary>
    ( s: fn (usize) -> StrategyFor<T>
    , p: fn(T)      -> Option<bool>
    ) {
  for limbs in 0 .. MAX_LIMBS {
    let mut cfg: Config = <_>::default();
    cfg.failure_persistence = None;
    cfg.cases = 64;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(limbs);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

impl BigUint {
  /// The value together with its `num` counterpart.
  pub fn sem(&self) -> (BigUintRef<'_>, num::BigUint) {
    let x = self.as_ref();
    (x,x.into())
  }
}

pub fn unary(limbs: usize) -> StrategyFor<BigUint> {
  arbitrary_with(limbs)
}

/// Two values of the same size.
pub fn binary(limbs: usize) -> StrategyFor<(BigUint,BigUint)> {
  arbitrary_with((limbs,limbs))
}

/// Two values whose sizes move in opposite directions.
pub fn skewed(limbs: usize) -> StrategyFor<(BigUint,BigUint)> {
  arbitrary_with((limbs, MAX_LIMBS - 1 - limbs))
}

pub fn ternary(limbs: usize) -> StrategyFor<(BigUint,BigUint,BigUint)> {
  arbitrary_with((limbs, limbs / 2, MAX_LIMBS - 1 - limbs))
}
