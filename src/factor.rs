//! Integer factorization by trial division and by Pollard's rho method.

use crate::primality::is_probable_prime;
use crate::sieve::primes_under;
use crate::traits::{PrimalityBase, PrimalityRefBase};
use num_integer::{Integer, Roots};
use num_modular::{ModularCoreOps, ModularUnaryOps};
use num_traits::{NumRef, RefNum};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::Rng;
use std::collections::BTreeMap;

/// Factor the target into primes by trial division, returning the map from
/// each prime factor to its multiplicity.
///
/// `primes` must hold ascending primes reaching at least √target; when it is
/// `None` a table is sieved on the spot. A caller factoring many numbers can
/// sieve once and pass the same table every time. Targets 0 and 1 come back
/// as an empty map.
pub fn factorize<T: PrimalityBase>(target: T, primes: Option<&[u64]>) -> BTreeMap<T, usize>
where
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let mut result = BTreeMap::new();
    if target <= T::one() {
        return result;
    }

    let residual = match primes {
        Some(table) => trial_division(table.iter().copied(), target, &mut result),
        None => {
            let bound = Roots::sqrt(&target)
                .to_u64()
                .map_or(u64::MAX, |s| s.saturating_add(1));
            trial_division(primes_under(bound), target, &mut result)
        }
    };
    if residual > T::one() {
        // everything below √target is divided out, so this is prime
        *result.entry(residual).or_insert(0) += 1;
    }
    result
}

/// Factor every integer below `limit` in one shared sieve pass; entry `n` of
/// the returned vector is the factorization of `n`, so entries 0 and 1 are
/// empty maps.
///
/// Cheaper than calling [factorize] in a loop when a whole range is needed:
/// each prime is located once and walked through its multiples.
pub fn factorize_under(limit: u64) -> Vec<BTreeMap<u64, usize>> {
    let mut result = vec![BTreeMap::new(); limit as usize];
    let mut residual: Vec<u64> = (0..limit).collect();
    for p in primes_under(limit) {
        for m in ((p as usize)..result.len()).step_by(p as usize) {
            while residual[m] % p == 0 {
                residual[m] /= p;
                *result[m].entry(p).or_insert(0) += 1;
            }
        }
    }
    result
}

/// Divide out every prime of the iterator while p² does not exceed what is
/// left of the target, recording multiplicities; returns the undivided rest.
fn trial_division<I, T>(primes: I, target: T, result: &mut BTreeMap<T, usize>) -> T
where
    I: Iterator<Item = u64>,
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let mut residual = target;
    for p in primes {
        let pt = T::from_u64(p).unwrap();
        if &pt * &pt > residual {
            break;
        }
        while residual.is_multiple_of(&pt) {
            residual = residual / &pt;
            *result.entry(pt.clone()).or_insert(0) += 1;
        }
    }
    residual
}

/// One attempt at finding a factor with Pollard's rho method, iterating
/// x ← x² + offset (mod target) from the given starting point with Brent's
/// cycle detection.
///
/// The gcd of target and the tortoise-hare distance is taken at every step;
/// a nontrivial divisor is returned as soon as one shows up, and `None`
/// means the cycle closed without one (the caller should retry with fresh
/// `start` and `offset`). The attempt always terminates: once the hare laps
/// the tortoise the gcd degenerates to the target itself.
pub fn pollard_rho<T>(target: &T, start: T, offset: T) -> Option<T>
where
    T: Integer
        + NumRef
        + Clone
        + for<'r> ModularCoreOps<&'r T, &'r T, Output = T>
        + for<'r> ModularUnaryOps<&'r T, Output = T>,
    for<'r> &'r T: RefNum<T>,
{
    let mut tortoise = start.clone();
    let mut hare = start;
    // the hare runs in stretches of doubling length, the tortoise teleports
    // to the hare at the start of each stretch
    let (mut power, mut length) = (1usize, 1usize);
    loop {
        if length == power {
            tortoise = hare.clone();
            power <<= 1;
            length = 0;
        }
        hare = hare.sqm(target).addm(&offset, target);
        length += 1;

        let diff = if tortoise > hare {
            &tortoise - &hare
        } else {
            &hare - &tortoise
        };
        let d = diff.gcd(target);
        if !d.is_one() {
            return if &d == target { None } else { Some(d) };
        }
    }
}

/// Keep attempting [pollard_rho] with random parameters until a nontrivial
/// divisor turns up.
///
/// The target must be an odd composite: for a prime there is no nontrivial
/// divisor to find and this loops forever, which is why [factorize_rho]
/// always checks probable primality first.
fn rho_divisor<T, R>(target: &T, rng: &mut R) -> T
where
    T: PrimalityBase + SampleUniform,
    for<'r> &'r T: PrimalityRefBase<T>,
    R: Rng + ?Sized,
{
    loop {
        let start = rng.sample(Uniform::new(T::one(), target));
        let offset = rng.sample(Uniform::new(T::one(), target));
        if let Some(d) = pollard_rho(target, start, offset) {
            return d;
        }
    }
}

/// Factor the target into primes with Pollard's rho method, no prime table
/// needed.
///
/// Factors of 2 are stripped first; after that every pending cofactor is
/// either recorded (once the Miller-Rabin test calls it prime) or split
/// through a random rho divisor, with multiplicities of equal primes summed.
/// Targets 0 and 1 come back as an empty map.
pub fn factorize_rho<T>(target: T) -> BTreeMap<T, usize>
where
    T: PrimalityBase + SampleUniform,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    factorize_rho_with(target, &mut rand::thread_rng())
}

/// [factorize_rho] with a caller-supplied random generator, which makes the
/// divisor search reproducible.
pub fn factorize_rho_with<T, R>(target: T, rng: &mut R) -> BTreeMap<T, usize>
where
    T: PrimalityBase + SampleUniform,
    for<'r> &'r T: PrimalityRefBase<T>,
    R: Rng + ?Sized,
{
    let mut result = BTreeMap::new();
    let two = T::from_u8(2).unwrap();
    let mut residual = target;
    let mut twos = 0;
    while residual > T::one() && residual.is_even() {
        residual = residual / &two;
        twos += 1;
    }
    if twos > 0 {
        result.insert(two, twos);
    }
    if residual <= T::one() {
        return result;
    }

    let mut todo = vec![residual];
    while let Some(cofactor) = todo.pop() {
        if is_probable_prime(&cofactor, None) {
            *result.entry(cofactor).or_insert(0) += 1;
        } else {
            let d = rho_divisor(&cofactor, rng);
            todo.push(&cofactor / &d);
            todo.push(d);
        }
    }
    result
}
