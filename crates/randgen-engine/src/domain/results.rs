//! Generation results.
//!
//! Aggregates are computed from the stored sequence on every call, so a
//! result can never report a total or tally that disagrees with its values.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::requests::GeneratorKind;

/// Integers drawn from a closed range, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeResult {
    values: Vec<i64>,
}

impl RangeResult {
    /// Wraps already drawn values.
    #[must_use]
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// The drawn values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl fmt::Display for RangeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.values.iter())
    }
}

/// Dice faces in roll order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceResult {
    values: Vec<u32>,
}

impl DiceResult {
    /// Wraps already rolled faces.
    #[must_use]
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// The rolled faces.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sum of all faces.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }
}

impl Serialize for DiceResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DiceResult", 2)?;
        state.serialize_field("values", &self.values)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

impl fmt::Display for DiceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.values.iter())?;
        write!(f, " (Total: {})", self.total())
    }
}

/// Coin outcomes in flip order; `true` is heads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinResult {
    outcomes: Vec<bool>,
}

impl CoinResult {
    /// Wraps already flipped outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<bool>) -> Self {
        Self { outcomes }
    }

    /// The flip outcomes.
    #[must_use]
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    /// Number of heads.
    #[must_use]
    pub fn heads_count(&self) -> usize {
        self.outcomes.iter().filter(|&&heads| heads).count()
    }

    /// Number of tails.
    #[must_use]
    pub fn tails_count(&self) -> usize {
        self.outcomes.len() - self.heads_count()
    }
}

impl Serialize for CoinResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CoinResult", 3)?;
        state.serialize_field("outcomes", &self.outcomes)?;
        state.serialize_field("heads_count", &self.heads_count())?;
        state.serialize_field("tails_count", &self.tails_count())?;
        state.end()
    }
}

impl fmt::Display for CoinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces = self
            .outcomes
            .iter()
            .map(|&heads| if heads { "Heads" } else { "Tails" });
        write_joined(f, faces)?;
        write!(
            f,
            "\nSummary: Heads: {}, Tails: {}",
            self.heads_count(),
            self.tails_count()
        )
    }
}

/// Output of one generation, matching the request's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationResult {
    /// From a range request.
    Range(RangeResult),
    /// From a dice request.
    Dice(DiceResult),
    /// From a coin request.
    Coin(CoinResult),
}

impl GenerationResult {
    /// The generator that produced this result.
    #[must_use]
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Self::Range(_) => GeneratorKind::Range,
            Self::Dice(_) => GeneratorKind::Dice,
            Self::Coin(_) => GeneratorKind::Coin,
        }
    }

    /// Number of generated values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Range(r) => r.values().len(),
            Self::Dice(r) => r.values().len(),
            Self::Coin(r) => r.outcomes().len(),
        }
    }

    /// Whether nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clipboard text for the whole result.
impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(r) => fmt::Display::fmt(r, f),
            Self::Dice(r) => fmt::Display::fmt(r, f),
            Self::Coin(r) => fmt::Display::fmt(r, f),
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
