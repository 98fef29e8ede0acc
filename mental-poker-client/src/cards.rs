use crate::error::GameError;

use std::fmt;

pub type Rank = u8;

pub const ACE: Rank = 1;
pub const JACK: Rank = 11;
pub const QUEEN: Rank = 12;
pub const KING: Rank = 13;

pub type Suit = u8;

pub const SPADES: Suit = 1;
pub const HEARTS: Suit = 2;
pub const CLUBS: Suit = 3;
pub const DIAMONDS: Suit = 4;

/// A playing card, only ever constructed from a validated (rank, suit)
/// byte pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Result<Card, GameError> {
        if !(ACE..=KING).contains(&rank) {
            return Err(GameError::InvalidRank(rank));
        }
        if !(SPADES..=DIAMONDS).contains(&suit) {
            return Err(GameError::InvalidSuit(suit));
        }
        Ok(Card { rank, suit })
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Presentation asset reference for a face-up card.
    pub fn image(self) -> String {
        format!("cards/{}_of_{}.svg", rank_token(self.rank), suit_token(self.suit))
    }
}

/// Presentation asset reference for a card that has not been revealed.
pub fn hidden() -> String {
    String::from("cards/back.svg")
}

/// Decode concatenated (rank, suit) byte pairs.
pub fn decode(bytes: &[u8]) -> Result<Vec<Card>, GameError> {
    if bytes.len() % 2 != 0 {
        return Err(GameError::MalformedCardBuffer(bytes.len()));
    }

    bytes
        .chunks_exact(2)
        .map(|pair| Card::new(pair[0], pair[1]))
        .collect()
}

/// Byte-level inverse of [`decode`].
pub fn encode(cards: &[Card]) -> Vec<u8> {
    cards
        .iter()
        .flat_map(|card| [card.rank, card.suit])
        .collect()
}

fn rank_token(rank: Rank) -> &'static str {
    match rank {
        ACE => "ace",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        JACK => "jack",
        QUEEN => "queen",
        KING => "king",
        _ => unreachable!("rank validated at construction"),
    }
}

fn suit_token(suit: Suit) -> &'static str {
    match suit {
        SPADES => "spades",
        HEARTS => "hearts",
        CLUBS => "clubs",
        DIAMONDS => "diamonds",
        _ => unreachable!("suit validated at construction"),
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            ACE => "Ace".to_string(),
            JACK => "Jack".to_string(),
            QUEEN => "Queen".to_string(),
            KING => "King".to_string(),
            n => n.to_string(),
        };
        let suit = match self.suit {
            SPADES => "Spades",
            HEARTS => "Hearts",
            CLUBS => "Clubs",
            DIAMONDS => "Diamonds",
            _ => unreachable!("suit validated at construction"),
        };
        write!(f, "{} of {}", rank, suit)
    }
}
