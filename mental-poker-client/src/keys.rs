use crate::error::GameError;
use crate::stage::{Stage, STAGES};
use crate::storage::{KeyField, KeyValueStore, StorageKey, DEFAULT_PREFIX};

use commutative_rsa::{keygen, KeyPair, BLOCK_SIZE};
use rand::Rng;
use tracing::{debug, trace};

/// In-memory cache of the four per-stage key slots.
#[derive(Clone, Debug)]
pub struct StageKeys {
    slots: [Option<KeyPair>; 4],
}

impl Default for StageKeys {
    fn default() -> Self {
        StageKeys {
            slots: [None, None, None, None],
        }
    }
}

impl StageKeys {
    pub fn get(&self, stage: Stage) -> Option<&KeyPair> {
        self.slots[stage.index() as usize].as_ref()
    }

    pub fn set(&mut self, stage: Stage, keypair: KeyPair) {
        self.slots[stage.index() as usize] = Some(keypair);
    }

    pub fn reset(&mut self) {
        self.slots = [None, None, None, None];
    }

    /// True once every stage slot holds a key pair.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }
}

/// Durable, per-account, per-stage key-pair storage with the slot cache
/// in front of it.
///
/// Records are hex strings under
/// `"<prefix>_<account>_<stage>_key_modulus"` /
/// `"..._key_exponent"`; an empty string is an absent half. A slot with
/// only one half present is treated as absent (a transient state left
/// by an interrupted write), while a half that is present but not valid
/// 32-byte hex is reported as corrupt.
pub struct StageKeyStore<S: KeyValueStore> {
    store: S,
    prefix: String,
    cache: StageKeys,
}

impl<S: KeyValueStore> StageKeyStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        StageKeyStore {
            store,
            prefix: prefix.into(),
            cache: StageKeys::default(),
        }
    }

    /// Generate a fresh key pair for every stage and persist them.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, account: &str) -> Result<(), GameError> {
        for stage in STAGES {
            debug!(%stage, account, "generating stage key");
            let keypair = keygen::generate(rng)?;
            self.save(account, stage, &keypair);
            self.cache.set(stage, keypair);
        }
        Ok(())
    }

    /// Persist one stage's key pair.
    pub fn save(&mut self, account: &str, stage: Stage, keypair: &KeyPair) {
        let modulus_key = self.record_key(account, stage, KeyField::Modulus);
        let exponent_key = self.record_key(account, stage, KeyField::Exponent);
        self.store.put(&modulus_key, hex::encode(keypair.modulus));
        self.store.put(&exponent_key, hex::encode(keypair.exponent));
    }

    /// Populate the cache from storage. Absent slots stay empty; that
    /// is a defined outcome, not an error.
    pub fn load(&mut self, account: &str) -> Result<(), GameError> {
        for stage in STAGES {
            debug!(%stage, account, "loading stage key");
            match self.load_slot(account, stage)? {
                Some(keypair) => self.cache.set(stage, keypair),
                None => self.cache.slots[stage.index() as usize] = None,
            }
        }
        Ok(())
    }

    /// Reset both halves of every stage record and drop the cache.
    pub fn clear(&mut self, account: &str) {
        for stage in STAGES {
            debug!(%stage, account, "clearing stage key");
            let modulus_key = self.record_key(account, stage, KeyField::Modulus);
            let exponent_key = self.record_key(account, stage, KeyField::Exponent);
            self.store.put(&modulus_key, String::new());
            self.store.put(&exponent_key, String::new());
        }
        self.cache.reset();
    }

    pub fn keys(&self) -> &StageKeys {
        &self.cache
    }

    /// Private exponent of the slot gating `stage`.
    pub fn secret_for(&self, stage: Stage) -> Option<[u8; BLOCK_SIZE]> {
        self.cache.get(stage).map(|keypair| keypair.exponent)
    }

    /// Published half of the slot gating `stage`.
    pub fn modulus_for(&self, stage: Stage) -> Option<[u8; BLOCK_SIZE]> {
        self.cache.get(stage).map(|keypair| keypair.modulus)
    }

    fn load_slot(&self, account: &str, stage: Stage) -> Result<Option<KeyPair>, GameError> {
        let modulus_key = self.record_key(account, stage, KeyField::Modulus);
        let exponent_key = self.record_key(account, stage, KeyField::Exponent);

        let modulus = self.store.get(&modulus_key).unwrap_or_default();
        let exponent = self.store.get(&exponent_key).unwrap_or_default();

        if modulus.is_empty() || exponent.is_empty() {
            return Ok(None);
        }

        Ok(Some(KeyPair {
            modulus: decode_record(&modulus_key, &modulus)?,
            exponent: decode_record(&exponent_key, &exponent)?,
        }))
    }

    fn record_key(&self, account: &str, stage: Stage, field: KeyField) -> String {
        let rendered = StorageKey {
            prefix: &self.prefix,
            account,
            stage,
            field,
        }
        .render();
        trace!(key = %rendered, "derived storage key");
        rendered
    }
}

fn decode_record(key: &str, value: &str) -> Result<[u8; BLOCK_SIZE], GameError> {
    let corrupt = || GameError::CorruptKeyRecord(key.to_string(), BLOCK_SIZE);
    let bytes = hex::decode(value).map_err(|_| corrupt())?;
    bytes.try_into().map_err(|_| corrupt())
}
