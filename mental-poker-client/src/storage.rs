use crate::stage::Stage;

use std::collections::HashMap;

/// Default namespace prefix for persisted key records.
pub const DEFAULT_PREFIX: &str = "blockchain_poker";

/// Which half of a key pair a record holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyField {
    Modulus,
    Exponent,
}

impl KeyField {
    fn suffix(self) -> &'static str {
        match self {
            KeyField::Modulus => "key_modulus",
            KeyField::Exponent => "key_exponent",
        }
    }
}

/// Typed address of one stored record; renders to the flat string key
/// the persisted layout uses.
#[derive(Clone, Copy, Debug)]
pub struct StorageKey<'a> {
    pub prefix: &'a str,
    pub account: &'a str,
    pub stage: Stage,
    pub field: KeyField,
}

impl StorageKey<'_> {
    pub fn render(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.prefix,
            self.account,
            self.stage.name(),
            self.field.suffix()
        )
    }
}

/// Durable string-to-string storage. The backend is injected so the
/// core stays testable; durability and I/O failures are the backend's
/// concern.
pub trait KeyValueStore {
    /// `None` and the empty string both denote an absent record.
    fn get(&self, key: &str) -> Option<String>;

    fn put(&mut self, key: &str, value: String);
}

/// In-memory backend, used in tests and as the reference semantics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.records.insert(key.to_string(), value);
    }
}
