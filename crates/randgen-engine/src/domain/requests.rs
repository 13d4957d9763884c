//! Generation requests.

use serde::Serialize;

/// Face counts offered for dice.
pub const ALLOWED_DICE_FACES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Most numbers drawn at once.
pub const MAX_NUMBER_COUNT: usize = 10;

/// Most dice rolled at once.
pub const MAX_DICE_COUNT: usize = 10;

/// Most coins flipped at once.
pub const MAX_COIN_COUNT: usize = 10;

/// Selects which generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Integers over a closed range.
    Range,
    /// Dice with a fixed face count.
    Dice,
    /// Fair coins.
    Coin,
}

/// Parameters for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    /// `count` integers in `[min, max]`. Expects `min < max` and
    /// `1 <= count <= MAX_NUMBER_COUNT`.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// Number of values.
        count: usize,
    },
    /// `count` dice with `faces` faces each.
    Dice {
        /// Faces per die.
        faces: u32,
        /// Number of dice.
        count: usize,
    },
    /// `count` coin flips.
    Coin {
        /// Number of coins.
        count: usize,
    },
}

impl GenerationRequest {
    /// The generator this request selects.
    #[must_use]
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Self::Range { .. } => GeneratorKind::Range,
            Self::Dice { .. } => GeneratorKind::Dice,
            Self::Coin { .. } => GeneratorKind::Coin,
        }
    }

    /// Number of values the request asks for.
    #[must_use]
    pub fn count(&self) -> usize {
        match *self {
            Self::Range { count, .. } | Self::Dice { count, .. } | Self::Coin { count } => count,
        }
    }
}
