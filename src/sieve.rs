//! Prime generation with bounded and unbounded sieves of Eratosthenes.

use bitvec::{bitvec, vec::BitVec};

/// Segments of the unbounded sieve never exceed this many odd candidates,
/// so peak memory stays flat no matter how far the sequence is pulled.
const SEGMENT_CAP: usize = 1_000_000;

/// Returns all primes strictly below `limit` in increasing order.
///
/// Each call rebuilds the sieve, so the returned iterator is as restartable
/// as calling this function again. Only odd candidates are stored: index `i`
/// of the bit vector stands for the value `2i + 1`, and the multiples of a
/// prime `p = 2i + 1` start at `p²`, which lives at index `2i(i + 1)`.
pub fn primes_under(limit: u64) -> PrimesUnder {
    if limit < 3 {
        return PrimesUnder {
            sieve: BitVec::new(),
            pos: 0,
            two_emitted: true,
        };
    }

    let half = (limit / 2) as usize;
    let mut sieve = bitvec![0; half];
    sieve.set(0, true); // 1 is not prime
    let mut i = 1usize;
    loop {
        let p = 2 * i as u64 + 1;
        if p * p >= limit {
            break;
        }
        if !sieve[i] {
            let mut m = 2 * i * (i + 1);
            while m < half {
                sieve.set(m, true);
                m += p as usize;
            }
        }
        i += 1;
    }

    PrimesUnder {
        sieve,
        pos: 0,
        two_emitted: false,
    }
}

/// Finite ascending iterator over the primes below a bound, created by
/// [primes_under].
pub struct PrimesUnder {
    sieve: BitVec,
    pos: usize,
    two_emitted: bool,
}

impl Iterator for PrimesUnder {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.two_emitted {
            self.two_emitted = true;
            return Some(2);
        }
        while self.pos < self.sieve.len() {
            let i = self.pos;
            self.pos += 1;
            if !self.sieve[i] {
                return Some(2 * i as u64 + 1);
            }
        }
        None
    }
}

/// Returns all primes in increasing order, without bound.
pub fn primes() -> Primes {
    Primes {
        found: Vec::new(),
        offset: 1,
        segment: bitvec![0; 3],
        pos: 0,
        two_emitted: false,
    }
}

/// Infinite ascending iterator over all primes, created by [primes].
///
/// The iterator owns a growing list of the prime indices found so far and
/// the current sieve segment; it is meant to be consumed by exactly one
/// caller. Stopping is simply ceasing to pull elements.
pub struct Primes {
    /// indices i of discovered odd primes 2i + 1, in increasing order
    found: Vec<usize>,
    /// index of the first candidate of the current segment
    offset: usize,
    segment: BitVec,
    pos: usize,
    two_emitted: bool,
}

impl Primes {
    /// Allocate the next segment and mark the multiples of every known prime
    /// whose square lands in or before it.
    fn advance_segment(&mut self) {
        self.offset += self.segment.len();
        let len = (self.offset as u128 * (2 * self.offset as u128 - 1))
            .min(SEGMENT_CAP as u128) as usize;
        let mut segment = bitvec![0; len];

        let end = (self.offset + len) as u128;
        for &i in &self.found {
            let square = 2 * i as u128 * (i as u128 + 1); // index of p²
            if square >= end {
                break;
            }
            let p = 2 * i + 1;
            let mut m = if square >= self.offset as u128 {
                (square - self.offset as u128) as usize
            } else {
                // p² is behind this segment, move up to the first multiple
                // of p at or past the segment start
                let behind = self.offset as u128 - square;
                let skip = (behind + p as u128 - 1) / p as u128;
                (square + skip * p as u128 - self.offset as u128) as usize
            };
            while m < len {
                segment.set(m, true);
                m += p;
            }
        }

        self.segment = segment;
        self.pos = 0;
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.two_emitted {
            self.two_emitted = true;
            return Some(2);
        }
        loop {
            while self.pos < self.segment.len() {
                let j = self.pos;
                self.pos += 1;
                if !self.segment[j] {
                    let i = self.offset + j;
                    self.found.push(i);
                    return Some(2 * i as u64 + 1);
                }
            }
            self.advance_segment();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    #[test]
    fn primes_under_small() {
        assert_eq!(primes_under(0).count(), 0);
        assert_eq!(primes_under(2).count(), 0);
        assert_eq!(primes_under(3).collect::<Vec<_>>(), vec![2]);
        assert_eq!(primes_under(4).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(primes_under(50).collect::<Vec<_>>(), PRIME50);
        // the bound is exclusive
        assert_eq!(primes_under(47).last(), Some(43));
        assert_eq!(primes_under(48).last(), Some(47));
    }

    #[test]
    fn primes_under_brute_force() {
        let sieved: Vec<u64> = primes_under(1000).collect();
        let brute: Vec<u64> = (2u64..1000)
            .filter(|&p| (2..).take_while(|d| d * d <= p).all(|d| p % d != 0))
            .collect();
        assert_eq!(sieved, brute);
    }

    #[test]
    fn unbounded_matches_bounded() {
        for (p1, p2) in primes().zip(primes_under(100000)) {
            assert_eq!(p1, p2);
        }
        assert_eq!(primes_under(100000).count(), 9592);
    }

    #[test]
    fn unbounded_crosses_segments() {
        // enough pulls to go through several segment reallocations
        let mut iter = primes();
        assert_eq!(iter.nth(9999), Some(104729)); // the 10000th prime
    }
}
