//! Client-side mirrors of the per-player state observed on-chain:
//! published stage moduli, revealed private exponents, and encrypted
//! hand buffers. The chain subscription layer fills these in; the core
//! only reads and validates them.

use crate::stage::Stage;

use commutative_rsa::BLOCK_SIZE;

/// One player's published stage moduli, one slot per stage. An empty
/// slot means the modulus has not been published yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishedKeys {
    pub hand: Vec<u8>,
    pub flop: Vec<u8>,
    pub turn: Vec<u8>,
    pub river: Vec<u8>,
}

impl PublishedKeys {
    /// True once the player has published anything at all.
    pub fn is_initialized(&self) -> bool {
        !self.hand.is_empty()
            || !self.flop.is_empty()
            || !self.turn.is_empty()
            || !self.river.is_empty()
    }

    /// True when every slot holds a full-width modulus.
    pub fn is_valid(&self) -> bool {
        self.hand.len() == BLOCK_SIZE
            && self.flop.len() == BLOCK_SIZE
            && self.turn.len() == BLOCK_SIZE
            && self.river.len() == BLOCK_SIZE
    }

    pub fn retrieve(&self, stage: Stage) -> &[u8] {
        match stage {
            Stage::Preflop => &self.hand,
            Stage::Flop => &self.flop,
            Stage::Turn => &self.turn,
            Stage::River => &self.river,
        }
    }
}

/// One player's revealed private exponents, filled in stage by stage as
/// the round progresses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSecrets {
    pub hand: Option<Vec<u8>>,
    pub flop: Option<Vec<u8>>,
    pub turn: Option<Vec<u8>>,
    pub river: Option<Vec<u8>>,
}

impl RevealedSecrets {
    pub fn retrieve(&self, stage: Stage) -> Option<&[u8]> {
        match stage {
            Stage::Preflop => self.hand.as_deref(),
            Stage::Flop => self.flop.as_deref(),
            Stage::Turn => self.turn.as_deref(),
            Stage::River => self.river.as_deref(),
        }
    }

    pub fn submit(&mut self, stage: Stage, secret: Vec<u8>) {
        let slot = match stage {
            Stage::Preflop => &mut self.hand,
            Stage::Flop => &mut self.flop,
            Stage::Turn => &mut self.turn,
            Stage::River => &mut self.river,
        };
        *slot = Some(secret);
    }

    /// Every revealed secret must be full width; unrevealed slots are
    /// fine.
    pub fn is_valid(&self) -> bool {
        [&self.hand, &self.flop, &self.turn, &self.river]
            .iter()
            .all(|secret| secret.as_ref().map(|s| s.len() == BLOCK_SIZE).unwrap_or(true))
    }
}

/// An encrypted hand as carried in chain call arguments: a fixed-width
/// ciphertext once dealt, a zero-length buffer before that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncryptedHand(Vec<u8>);

impl EncryptedHand {
    pub fn from_chain_bytes(bytes: Vec<u8>) -> Self {
        EncryptedHand(bytes)
    }

    pub fn undealt() -> Self {
        EncryptedHand(Vec::new())
    }

    pub fn is_dealt(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(fill: u8) -> Vec<u8> {
        vec![fill; BLOCK_SIZE]
    }

    #[test]
    fn published_keys_initialization_and_validity() {
        let mut keys = PublishedKeys::default();
        assert!(!keys.is_initialized());
        assert!(!keys.is_valid());

        keys.flop = block(1);
        assert!(keys.is_initialized());
        assert!(!keys.is_valid());

        keys.hand = block(2);
        keys.turn = block(3);
        keys.river = block(4);
        assert!(keys.is_valid());
        assert_eq!(keys.retrieve(Stage::Turn), &block(3)[..]);
        assert_eq!(keys.retrieve(Stage::Preflop), &block(2)[..]);
    }

    #[test]
    fn secrets_accumulate_per_stage() {
        let mut secrets = RevealedSecrets::default();
        assert_eq!(secrets.retrieve(Stage::Flop), None);
        assert!(secrets.is_valid());

        secrets.submit(Stage::Flop, block(7));
        assert_eq!(secrets.retrieve(Stage::Flop), Some(&block(7)[..]));
        assert_eq!(secrets.retrieve(Stage::Turn), None);

        secrets.submit(Stage::Preflop, vec![1, 2, 3]);
        assert!(!secrets.is_valid());
    }

    #[test]
    fn hand_dealt_state_follows_buffer_length() {
        assert!(!EncryptedHand::undealt().is_dealt());
        assert!(!EncryptedHand::from_chain_bytes(vec![]).is_dealt());
        let hand = EncryptedHand::from_chain_bytes(block(9));
        assert!(hand.is_dealt());
        assert_eq!(hand.as_bytes().len(), BLOCK_SIZE);
    }
}
