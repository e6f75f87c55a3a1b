mod combinatorics;
mod dset;
mod euclid;
mod factor;
mod integer;
mod primality;
mod sieve;
mod traits;

pub use combinatorics::{binom_mod, pythagorean_triples};
pub use dset::DisjointSets;
pub use euclid::{chinese_remainders, gcd_ext, inv_mod, inv_mods};
pub use factor::{factorize, factorize_rho, factorize_rho_with, factorize_under, pollard_rho};
pub use primality::{is_prime, is_probable_prime};
pub use sieve::{primes, primes_under, Primes, PrimesUnder};
pub use traits::{BitTest, PrimalityBase, PrimalityRefBase, PrimalityUtils};
