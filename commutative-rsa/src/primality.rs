use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Witness count for Miller-Rabin; error probability at most 4^-24.
const MILLER_RABIN_ROUNDS: usize = 24;

const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

/// Sample a random prime of exactly `bits` bits.
///
/// Candidates are drawn with the top and bottom bits forced, so the
/// product of two `bits`-bit primes always reaches `2 * bits - 1` bits.
pub fn gen_prime<R: Rng>(rng: &mut R, bits: u64) -> BigUint {
    assert!(bits >= 2, "prime must have at least 2 bits");

    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);

        if is_prime(rng, &candidate) {
            return candidate;
        }
    }
}

/// Probabilistic primality test: small-prime trial division, then
/// Miller-Rabin with random witnesses.
pub fn is_prime<R: Rng>(rng: &mut R, n: &BigUint) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^r * d with d odd
    let one = BigUint::one();
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let two = BigUint::from(2u32);
    'witness: for _ in 0..MILLER_RABIN_ROUNDS {
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = a.modpow(&d, n);

        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 0..r.saturating_sub(1) {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
