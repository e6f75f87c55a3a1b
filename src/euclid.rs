//! Euclid's algorithm and what it buys: extended gcd, modular inverses and
//! the Chinese remainder theorem.

/// Extended Euclid's algorithm: returns `(r, u, v)` with
/// `r = gcd(a, b) = a*u + b*v`. Inputs are expected non-negative.
pub fn gcd_ext(a: i64, b: i64) -> (i64, i64, i64) {
    // r = a*u + b*v and r2 = a*u2 + b*v2 are the loop invariants
    let (mut r, mut u, mut v) = (a, 1i64, 0i64);
    let (mut r2, mut u2, mut v2) = (b, 0i64, 1i64);
    while r != 0 {
        let q = r2 / r;
        let (nr, nu, nv) = (r2 - q * r, u2 - q * u, v2 - q * v);
        r2 = r;
        u2 = u;
        v2 = v;
        r = nr;
        u = nu;
        v = nv;
    }
    (r2, u2, v2)
}

/// Returns the inverse of `a` modulo `m` in `[0, m)`, or `None` when
/// `gcd(a, m) != 1` and no inverse exists.
pub fn inv_mod(a: i64, m: i64) -> Option<i64> {
    let (r, u, _) = gcd_ext(a, m);
    if r == 1 {
        Some(u.rem_euclid(m))
    } else {
        None
    }
}

/// Returns the inverses of `1..n` modulo the prime `m` in one pass, using
/// inv(i) = -(m / i) * inv(m mod i). Entry 0 is a placeholder. `n` defaults
/// to `m`, giving the inverse of every nonzero residue.
pub fn inv_mods(m: i64, n: Option<i64>) -> Vec<i64> {
    let n = n.unwrap_or(m);
    let mut inv = vec![0, 1];
    for i in 2..n {
        let (d, r) = (m / i, m % i);
        inv.push((-d * inv[r as usize]).rem_euclid(m));
    }
    inv
}

/// Solve the system x ≡ r (mod m) over all `(r, m)` pairs, for pairwise
/// coprime moduli, returning the smallest non-negative solution.
///
/// The empty system solves to 0. `None` means some pair of moduli shared a
/// factor and the incremental inverse did not exist.
pub fn chinese_remainders(congruences: &[(i64, i64)]) -> Option<i64> {
    let mut x = 0i64;
    let mut m = 1i64;
    for &(r, modulus) in congruences {
        let inv = inv_mod(m.rem_euclid(modulus), modulus)?;
        let t = ((r - x).rem_euclid(modulus) * inv).rem_euclid(modulus);
        x += m * t;
        m *= modulus;
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;

    #[test]
    fn gcd_ext_identity() {
        for &(a, b) in &[(7i64, 0), (78, 13), (2, 3), (20, 30), (48, 67), (37, 37)] {
            let (r, u, v) = gcd_ext(a, b);
            assert_eq!(r, u * a + v * b);
            assert_eq!(r, a.gcd(&b));
        }
    }

    #[test]
    fn inv_mod_cases() {
        for &(a, m) in &[(3i64, 6), (13, 17), (31, 7), (20, 20)] {
            match inv_mod(a, m) {
                Some(i) => {
                    assert_eq!(a.gcd(&m), 1);
                    assert_eq!(i * a % m, 1);
                }
                None => assert_ne!(a.gcd(&m), 1),
            }
        }
    }

    #[test]
    fn inv_mods_pairwise_products() {
        for &(m, n) in &[(7i64, None), (13, Some(5)), (17, None), (31, None)] {
            let inv = inv_mods(m, n);
            assert_eq!(inv.len() as i64, n.unwrap_or(m));
            for (i, &v) in inv.iter().enumerate().skip(1) {
                assert_eq!(i as i64 * v % m, 1, "inverse of {} mod {}", i, m);
            }
        }
    }

    #[test]
    fn chinese_remainders_cases() {
        assert_eq!(chinese_remainders(&[]), Some(0));
        assert_eq!(chinese_remainders(&[(7, 13)]), Some(7));
        assert_eq!(chinese_remainders(&[(31 % 13, 13), (31 % 19, 19)]), Some(31));
        // shared factor between moduli
        assert_eq!(chinese_remainders(&[(1, 6), (2, 4)]), None);
    }
}
