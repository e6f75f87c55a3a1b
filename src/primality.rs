//! Deterministic and probabilistic primality tests.

use crate::traits::{PrimalityBase, PrimalityRefBase, PrimalityUtils};

/// Deterministic witness sets for the Miller-Rabin test, keyed by the bound
/// under which they are exhaustive. Taken as given from the usual tables;
/// tested against, not re-derived.
const WITNESS_TIERS: [(u64, &[u64]); 6] = [
    (1_373_653, &[2, 3]),
    (9_080_191, &[31, 73]),
    (4_759_123_141, &[2, 7, 61]),
    (2_152_302_898_747, &[2, 3, 5, 7, 11]),
    (3_474_749_660_383, &[2, 3, 5, 7, 11, 13]),
    (341_550_071_728_321, &[2, 3, 5, 7, 11, 13, 17]),
];

/// Witnesses for everything past the tier table, deterministic over the
/// whole u64 range. The collection is from <http://miller-rabin.appspot.com/>
const WITNESS_LARGE: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

fn default_witnesses<T: PrimalityBase>(target: &T) -> &'static [u64] {
    if let Some(n) = target.to_u64() {
        for &(bound, witnesses) in WITNESS_TIERS.iter() {
            if n < bound {
                return witnesses;
            }
        }
    }
    &WITNESS_LARGE
}

/// Return whether target is a prime, by trial division over the candidates
/// of form 6k±1 up to √target.
///
/// Exact for any magnitude but costs O(√target), so it is only meant for
/// small and moderate inputs; use [is_probable_prime] beyond that.
pub fn is_prime<T: PrimalityBase>(target: &T) -> bool
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    if target < &T::from_u8(2).unwrap() {
        return false;
    }
    if target < &T::from_u8(4).unwrap() {
        return true;
    }
    if target.is_even() {
        return false;
    }
    if target < &T::from_u8(9).unwrap() {
        return true;
    }
    if target.is_multiple_of(&T::from_u8(3).unwrap()) {
        return false;
    }

    let two = T::from_u8(2).unwrap();
    let six = T::from_u8(6).unwrap();
    let mut i = T::from_u8(5).unwrap();
    while &(&i * &i) <= target {
        if target.is_multiple_of(&i) || target.is_multiple_of(&(&i + &two)) {
            return false;
        }
        i = i + &six;
    }
    true
}

/// Miller-Rabin probabilistic primality test.
///
/// When `witnesses` is `None` a deterministic set is picked from the
/// magnitude of the target:
///
/// - target <             1,373,653: {2, 3}
/// - target <             9,080,191: {31, 73}
/// - target <         4,759,123,141: {2, 7, 61}
/// - target <     2,152,302,898,747: {2, 3, 5, 7, 11}
/// - target <     3,474,749,660,383: {2, 3, 5, 7, 11, 13}
/// - target <   341,550,071,728,321: {2, 3, 5, 7, 11, 13, 17}
/// - otherwise: {2, 325, 9375, 28178, 450775, 9780504, 1795265022}
///
/// The answer is exact for any u64 input; past u64 (or with a caller-chosen
/// witness set) a `true` result means "no chosen witness disproved
/// primality". A witness equal to the target is skipped.
pub fn is_probable_prime<T: PrimalityBase>(target: &T, witnesses: Option<&[u64]>) -> bool
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    if target <= &T::one() {
        return false;
    }
    let two = T::from_u8(2).unwrap();
    if target == &two {
        return true;
    }
    if target.is_even() {
        return false;
    }
    if target < &T::from_u8(9).unwrap() {
        return true;
    }
    if target.is_multiple_of(&T::from_u8(3).unwrap()) {
        return false;
    }
    if target.is_multiple_of(&T::from_u8(5).unwrap()) {
        return false;
    }

    let witnesses = witnesses.unwrap_or_else(|| default_witnesses(target));
    witnesses.iter().all(|&w| {
        let base = match T::from_u64(w) {
            Some(base) => base,
            // the witness is wider than T, so reduce it first; T narrower
            // than u64 always converts back
            None => T::from_u64(w % target.to_u64().unwrap()).unwrap(),
        };
        &base == target || target.is_sprp(base)
    })
}

impl<T: PrimalityBase> PrimalityUtils for T
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    fn is_sprp(&self, base: T) -> bool {
        if self <= &T::one() {
            return false;
        }

        // find 2^t * u + 1 = n with u odd
        let tm1 = self - T::one();
        let t = tm1.trailing_zeros();
        let u = &tm1 >> t;

        let mut x = base.powm(&u, self);
        for _ in 0..t {
            let square = x.clone().sqm(self);
            if square.is_one() && !x.is_one() && x != tm1 {
                // nontrivial square root of 1
                return false;
            }
            x = square;
        }
        x.is_one()
    }
}
