/// The four betting stages of a round, each gated by its own key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
}

pub const STAGES: [Stage; 4] = [Stage::Preflop, Stage::Flop, Stage::Turn, Stage::River];

impl Stage {
    /// Stage name as used in storage record keys.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Stage::Preflop => 0,
            Stage::Flop => 1,
            Stage::Turn => 2,
            Stage::River => 3,
        }
    }

    /// Map a raw stage index from chain state onto the cycle; the index
    /// is taken modulo 4.
    pub fn from_index(index: u32) -> Stage {
        STAGES[(index % 4) as usize]
    }

    /// The stage whose secret is passed next. Preflop follows river:
    /// handing over the preflop secret at the end of the round reveals
    /// our own hand cards, which is the terminal action of a showdown.
    pub fn next(self) -> Stage {
        Stage::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
