use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Width of every cipher operand: keys, ciphertexts and the padded
/// plaintext all live in 32-byte little-endian buffers.
pub const BLOCK_SIZE: usize = 32;

/// Interpret a little-endian byte buffer as an unsigned big integer.
pub fn from_little_endian(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Serialize a big integer into a zero-padded 32-byte little-endian buffer.
///
/// The value must fit in [`BLOCK_SIZE`] bytes; everything produced by
/// [`mod_exp`] under a 256-bit modulus does.
pub fn to_little_endian(value: &BigUint) -> [u8; BLOCK_SIZE] {
    let bytes = value.to_bytes_le();
    assert!(
        bytes.len() <= BLOCK_SIZE,
        "value needs {} bytes, block is {}",
        bytes.len(),
        BLOCK_SIZE
    );

    let mut block = [0u8; BLOCK_SIZE];
    block[..bytes.len()].copy_from_slice(&bytes);
    block
}

/// Binary (square-and-multiply) modular exponentiation.
///
/// A zero modulus is a caller bug, not a recoverable condition, and
/// panics.
pub fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be non-zero");

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = &result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::RandBigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn little_endian_round_trip() {
        let value = BigUint::from(0x0102_0304u32);
        let block = to_little_endian(&value);
        assert_eq!(&block[..4], &[0x04, 0x03, 0x02, 0x01]);
        assert!(block[4..].iter().all(|&b| b == 0));
        assert_eq!(from_little_endian(&block), value);
    }

    #[test]
    fn zero_serializes_to_empty_block() {
        assert_eq!(to_little_endian(&BigUint::zero()), [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn mod_exp_small_values() {
        // 4^13 mod 497 = 445
        let result = mod_exp(
            &BigUint::from(4u32),
            &BigUint::from(13u32),
            &BigUint::from(497u32),
        );
        assert_eq!(result, BigUint::from(445u32));
    }

    #[test]
    fn mod_exp_zero_exponent_is_one() {
        let result = mod_exp(
            &BigUint::from(123u32),
            &BigUint::zero(),
            &BigUint::from(77u32),
        );
        assert_eq!(result, BigUint::one());
    }

    #[test]
    fn mod_exp_agrees_with_modpow() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for _ in 0..50 {
            let base = rng.gen_biguint(256);
            let exponent = rng.gen_biguint(256);
            let modulus = rng.gen_biguint(256) + 1u32;
            assert_eq!(
                mod_exp(&base, &exponent, &modulus),
                base.modpow(&exponent, &modulus)
            );
        }
    }

    #[test]
    #[should_panic(expected = "modulus must be non-zero")]
    fn mod_exp_rejects_zero_modulus() {
        mod_exp(&BigUint::one(), &BigUint::one(), &BigUint::zero());
    }
}
