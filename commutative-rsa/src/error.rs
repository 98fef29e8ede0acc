use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CryptoError {
    #[error("plaintext of {0} bytes exceeds the {1}-byte cipher block")]
    InputTooLarge(usize, usize),

    #[error("key generation broke the public-exponent invariant: {0}")]
    KeyGenInvariantViolation(String),
}
