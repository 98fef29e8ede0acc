//! Commutative RSA-style encryption over fixed 32-byte blocks.
//!
//! Every party raises a plaintext block to an exponent modulo its own
//! 256-bit modulus. Because encryption and decryption are both plain
//! modular exponentiations, layers applied under different moduli can be
//! peeled off in any order, which is what lets two untrusted parties deal
//! and reveal cards without a trusted dealer.
//!
//! This is a proof-of-concept scheme: raw RSA without padding leaks
//! equality of plaintexts and must not be used outside the game protocol
//! it was written for.

pub mod bigint;
pub mod cipher;
pub mod error;
pub mod keygen;
pub mod primality;

#[cfg(test)]
mod tests;

pub use bigint::BLOCK_SIZE;
pub use cipher::PUBLIC_EXPONENT;
pub use error::CryptoError;
pub use keygen::KeyPair;
