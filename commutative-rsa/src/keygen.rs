use crate::bigint::{from_little_endian, mod_exp, to_little_endian, BLOCK_SIZE};
use crate::cipher::PUBLIC_EXPONENT;
use crate::error::CryptoError;
use crate::primality::gen_prime;

use core::fmt;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

/// Each prime factor is 128 bits, giving a 255- or 256-bit modulus that
/// fills the cipher block.
const PRIME_BITS: u64 = 128;

/// One stage's key material, both halves as 32-byte little-endian
/// integers.
///
/// `modulus` is published on-chain so the counterparty can encrypt
/// toward this account; `exponent` is the private decryption exponent
/// paired with the fixed public exponent 65537, withheld until the
/// stage's reveal.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub modulus: [u8; BLOCK_SIZE],
    pub exponent: [u8; BLOCK_SIZE],
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair {{ modulus: ")?;
        for byte in self.modulus.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ", exponent: <private> }}")
    }
}

/// Generate a fresh 256-bit key pair with public exponent exactly 65537.
///
/// Every call draws independent randomness; stage keys share nothing.
pub fn generate<R: Rng>(rng: &mut R) -> Result<KeyPair, CryptoError> {
    let e = BigUint::from(PUBLIC_EXPONENT);

    // gcd(e, phi) = 1 needs p, q != 1 (mod e) since e is prime
    let p = gen_factor(rng, &e);
    let q = loop {
        let q = gen_factor(rng, &e);
        if q != p {
            break q;
        }
    };

    let n = &p * &q;
    let phi = (&p - 1u32) * (&q - 1u32);
    let d = e.modinv(&phi).ok_or_else(|| {
        CryptoError::KeyGenInvariantViolation(String::from(
            "65537 is not invertible modulo phi(n)",
        ))
    })?;

    verify_pair(&n, &e, &d)?;

    Ok(KeyPair {
        modulus: to_little_endian(&n),
        exponent: to_little_endian(&d),
    })
}

fn gen_factor<R: Rng>(rng: &mut R, e: &BigUint) -> BigUint {
    loop {
        let candidate = gen_prime(rng, PRIME_BITS);
        if &candidate % e != BigUint::one() {
            return candidate;
        }
    }
}

/// Check on sample plaintexts that the private exponent actually
/// inverts an encryption under the public exponent 65537.
fn verify_pair(n: &BigUint, e: &BigUint, d: &BigUint) -> Result<(), CryptoError> {
    for sample in [2u32, 3, 251] {
        let m = BigUint::from(sample);
        if mod_exp(&mod_exp(&m, e, n), d, n) != m {
            return Err(CryptoError::KeyGenInvariantViolation(String::from(
                "private exponent does not invert the public exponent",
            )));
        }
    }
    Ok(())
}

impl KeyPair {
    /// The modulus as a big integer.
    pub fn modulus_int(&self) -> BigUint {
        from_little_endian(&self.modulus)
    }
}
