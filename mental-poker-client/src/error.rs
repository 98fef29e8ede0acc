use commutative_rsa::CryptoError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("no active identity to namespace stage keys under")]
    NoActiveIdentity,

    #[error("card buffer of {0} bytes is not a sequence of (rank, suit) pairs")]
    MalformedCardBuffer(usize),

    #[error("rank byte {0} outside 1..=13")]
    InvalidRank(u8),

    #[error("suit byte {0} outside 1..=4")]
    InvalidSuit(u8),

    #[error("stored record under '{0}' is not a {1}-byte hex value")]
    CorruptKeyRecord(String, usize),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
