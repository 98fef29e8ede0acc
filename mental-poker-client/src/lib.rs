//! Client core for a mental-poker game played over a blockchain.
//!
//! Each player generates one commutative-RSA key pair per betting stage,
//! publishes the moduli on-chain, lets the dealer encrypt cards toward
//! them, and reveals the private exponents stage by stage. This crate
//! owns the key lifecycle, the staged reveal order, and the card wire
//! codec; observing chain state and submitting transactions is the
//! surrounding system's job.
//!
//! All operations are synchronous and side-effect free except for the
//! injected [`storage::KeyValueStore`].

pub mod cards;
pub mod error;
pub mod keys;
pub mod stage;
pub mod storage;
pub mod table;


pub use commutative_rsa::{cipher, CryptoError, KeyPair, BLOCK_SIZE, PUBLIC_EXPONENT};
pub use error::GameError;

use cards::Card;
use keys::{StageKeyStore, StageKeys};
use rand::Rng;
use stage::Stage;
use storage::KeyValueStore;

/// Explicit session context passed into every operation that touches
/// persisted keys. The account identity is only ever used as a storage
/// namespace.
#[derive(Clone, Debug, Default)]
pub struct Session {
    account: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Session::default()
    }

    pub fn for_account(account: impl Into<String>) -> Self {
        Session {
            account: Some(account.into()),
        }
    }

    pub fn set_account(&mut self, account: impl Into<String>) {
        self.account = Some(account.into());
    }

    pub fn clear_account(&mut self) {
        self.account = None;
    }

    pub fn resolve(&self) -> Result<&str, GameError> {
        self.account.as_deref().ok_or(GameError::NoActiveIdentity)
    }
}

/// The collaborator-facing surface of the core: key lifecycle, cipher
/// operations, stage sequencing and the card codec, bound to one
/// session and one storage backend.
pub struct PokerClient<S: KeyValueStore> {
    session: Session,
    keystore: StageKeyStore<S>,
}

impl<S: KeyValueStore> PokerClient<S> {
    pub fn new(store: S, session: Session) -> Self {
        PokerClient {
            session,
            keystore: StageKeyStore::new(store),
        }
    }

    pub fn with_prefix(store: S, session: Session, prefix: impl Into<String>) -> Self {
        PokerClient {
            session,
            keystore: StageKeyStore::with_prefix(store, prefix),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Generate and persist a fresh key pair for every stage, typically
    /// at join time.
    pub fn generate_stage_keys<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let account = self.session.resolve()?.to_string();
        self.keystore.generate(rng, &account)
    }

    /// Reload previously persisted stage keys into the cache.
    pub fn load_stage_keys(&mut self) -> Result<(), GameError> {
        let account = self.session.resolve()?.to_string();
        self.keystore.load(&account)
    }

    /// Drop all stage keys, both persisted and cached.
    pub fn clear_stage_keys(&mut self) -> Result<(), GameError> {
        let account = self.session.resolve()?.to_string();
        self.keystore.clear(&account);
        Ok(())
    }

    pub fn stage_keys(&self) -> &StageKeys {
        self.keystore.keys()
    }

    /// The modulus to publish on-chain for `stage`, if generated.
    pub fn public_modulus(&self, stage: Stage) -> Option<[u8; BLOCK_SIZE]> {
        self.keystore.modulus_for(stage)
    }

    /// Encrypt encoded card bytes toward the owner of
    /// `recipient_modulus`.
    pub fn encrypt_card(
        &self,
        plaintext: &[u8],
        recipient_modulus: &[u8; BLOCK_SIZE],
    ) -> Result<[u8; BLOCK_SIZE], GameError> {
        Ok(cipher::encrypt(plaintext, recipient_modulus)?)
    }

    /// Decrypt a card buffer with an observed modulus and a revealed
    /// private exponent.
    ///
    /// The pair is taken at face value: nothing checks that the
    /// exponent actually belongs to the modulus published for that
    /// stage. A counterparty revealing a mismatched pair corrupts the
    /// decoded result, it does not fail here.
    pub fn decrypt_card(
        &self,
        ciphertext: &[u8],
        modulus: &[u8; BLOCK_SIZE],
        exponent: &[u8; BLOCK_SIZE],
    ) -> Result<Vec<u8>, GameError> {
        Ok(cipher::decrypt(ciphertext, modulus, exponent)?)
    }

    /// Advance the stage cycle.
    pub fn next_stage(&self, stage: Stage) -> Stage {
        stage.next()
    }

    /// The private exponent to release when play reaches `stage`.
    /// After the river this wraps back to the preflop slot: the final
    /// reveal discloses our own hand.
    pub fn reveal_secret_for(&self, stage: Stage) -> Option<[u8; BLOCK_SIZE]> {
        self.keystore.secret_for(stage)
    }

    pub fn decode_cards(&self, bytes: &[u8]) -> Result<Vec<Card>, GameError> {
        cards::decode(bytes)
    }

    pub fn encode_cards(&self, cards: &[Card]) -> Vec<u8> {
        cards::encode(cards)
    }
}
