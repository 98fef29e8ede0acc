use crate::bigint::{from_little_endian, mod_exp, to_little_endian, BLOCK_SIZE};
use crate::error::CryptoError;

use num_bigint::BigUint;

/// Fixed public encryption exponent shared by every generated key pair.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Encrypt up to 32 bytes of plaintext toward the owner of `modulus`.
///
/// Anyone holding a published modulus can encrypt; only the private
/// exponent paired with it decrypts.
pub fn encrypt(data: &[u8], modulus: &[u8; BLOCK_SIZE]) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    generic_crypter(data, modulus, &BigUint::from(PUBLIC_EXPONENT))
}

/// Decrypt a block with a revealed private exponent.
///
/// The result is trimmed back to the minimal little-endian
/// representation: the cipher pads plaintexts out to the full block, so
/// the trailing zero bytes carry no information. A plaintext whose own
/// last byte is zero does not survive the trim; card encodings never end
/// in zero.
pub fn decrypt(
    data: &[u8],
    modulus: &[u8; BLOCK_SIZE],
    private_exponent: &[u8; BLOCK_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    let block = generic_crypter(data, modulus, &from_little_endian(private_exponent))?;

    let mut bytes = block.to_vec();
    while let Some(0) = bytes.last() {
        bytes.pop();
    }
    Ok(bytes)
}

fn generic_crypter(
    data: &[u8],
    modulus: &[u8; BLOCK_SIZE],
    exponent: &BigUint,
) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    if data.len() > BLOCK_SIZE {
        return Err(CryptoError::InputTooLarge(data.len(), BLOCK_SIZE));
    }

    let base = from_little_endian(data);
    let modulus = from_little_endian(modulus);

    Ok(to_little_endian(&mod_exp(&base, exponent, &modulus)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // fixed 256-bit test pair: modulus and its private exponent
    const PUBLIC_KEY: [u8; BLOCK_SIZE] = [
        159, 152, 51, 63, 56, 236, 171, 124, 45, 135, 54, 162, 205, 236, 198, 245, 19, 46, 53,
        100, 118, 84, 91, 52, 154, 205, 76, 225, 199, 53, 134, 136,
    ];
    const PRIVATE_KEY: [u8; BLOCK_SIZE] = [
        25, 179, 118, 205, 152, 40, 219, 84, 40, 144, 120, 121, 145, 37, 130, 26, 36, 45, 66, 62,
        172, 151, 163, 62, 196, 188, 207, 172, 93, 93, 87, 81,
    ];

    #[test]
    fn composition_is_identity() {
        let message: &[u8] = b"Don't tell anybody.";
        let encrypted = encrypt(message, &PUBLIC_KEY).unwrap();
        let decrypted = decrypt(&encrypted, &PUBLIC_KEY, &PRIVATE_KEY).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn ciphertext_fills_the_block() {
        let encrypted = encrypt(&[7, 2], &PUBLIC_KEY).unwrap();
        assert_eq!(encrypted.len(), BLOCK_SIZE);
        assert_ne!(&encrypted[..2], &[7, 2]);
    }

    #[test]
    fn decrypt_trims_padding_to_plaintext_length() {
        let message = [13, 1, 12, 2];
        let encrypted = encrypt(&message, &PUBLIC_KEY).unwrap();
        let decrypted = decrypt(&encrypted, &PUBLIC_KEY, &PRIVATE_KEY).unwrap();
        assert_eq!(decrypted.len(), message.len());
        assert_eq!(decrypted, message);
    }

    #[test]
    fn oversized_plaintext_is_rejected() {
        let oversized = [0u8; BLOCK_SIZE + 1];
        assert_eq!(
            encrypt(&oversized, &PUBLIC_KEY),
            Err(CryptoError::InputTooLarge(BLOCK_SIZE + 1, BLOCK_SIZE))
        );
    }

    #[test]
    fn oversized_ciphertext_is_rejected() {
        let oversized = [0u8; BLOCK_SIZE + 1];
        assert_eq!(
            decrypt(&oversized, &PUBLIC_KEY, &PRIVATE_KEY),
            Err(CryptoError::InputTooLarge(BLOCK_SIZE + 1, BLOCK_SIZE))
        );
    }

    #[test]
    fn full_block_plaintext_is_accepted() {
        let mut message = [0xabu8; BLOCK_SIZE];
        // keep the value below the modulus so the block round-trips
        message[BLOCK_SIZE - 1] = 0x01;
        let encrypted = encrypt(&message, &PUBLIC_KEY).unwrap();
        let decrypted = decrypt(&encrypted, &PUBLIC_KEY, &PRIVATE_KEY).unwrap();
        assert_eq!(decrypted, message);
    }
}
