//! Persisted widget configuration.

use std::fmt;

use randgen_core::error::DomainError;
use randgen_core::rng::DeterministicRng;
use randgen_core::settings::{SettingKey, SettingValue, SettingsStore};
use randgen_engine::application::input::{validate_coins, validate_dice, validate_range};
use randgen_engine::domain::generators;
use randgen_engine::domain::requests::{GenerationRequest, GeneratorKind};
use randgen_engine::domain::results::GenerationResult;
use tracing::info;

/// Generator shown by the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Random integers.
    #[default]
    Numbers,
    /// Dice rolls.
    Dice,
    /// Coin flips.
    Coins,
}

impl WidgetKind {
    /// Persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Dice => "dice",
            Self::Coins => "coins",
        }
    }

    /// Parses a persisted value. Anything unrecognised is treated as
    /// [`WidgetKind::Numbers`].
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dice" => Self::Dice,
            "coins" => Self::Coins,
            _ => Self::Numbers,
        }
    }
}

impl From<GeneratorKind> for WidgetKind {
    fn from(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Range => Self::Numbers,
            GeneratorKind::Dice => Self::Dice,
            GeneratorKind::Coin => Self::Coins,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numbers widget parameters, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParams {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// How many numbers.
    pub count: i64,
}

/// Dice widget parameters, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceParams {
    /// Faces per die.
    pub faces: i64,
    /// How many dice.
    pub count: i64,
}

/// Coin widget parameters, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinParams {
    /// How many coins.
    pub count: i64,
}

/// Everything the widget needs to generate, for every kind.
///
/// Parameters for all kinds are kept, not only the selected one, so switching
/// kind back and forth does not lose settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Selected kind.
    pub kind: WidgetKind,
    /// Numbers parameters.
    pub range: RangeParams,
    /// Dice parameters.
    pub dice: DiceParams,
    /// Coin parameters.
    pub coins: CoinParams,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_lookup(SettingKey::default_value)
    }
}

impl WidgetConfig {
    /// Reads the configuration; absent keys take their defaults.
    #[must_use]
    pub fn load(store: &dyn SettingsStore) -> Self {
        Self::from_lookup(|key| store.get(key))
    }

    fn from_lookup(lookup: impl Fn(SettingKey) -> SettingValue) -> Self {
        let int = |key: SettingKey| lookup(key).as_int().unwrap_or_default();
        let kind = match lookup(SettingKey::WidgetType) {
            SettingValue::Text(text) => WidgetKind::from_stored(&text),
            SettingValue::Int(_) => WidgetKind::default(),
        };

        Self {
            kind,
            range: RangeParams {
                min: int(SettingKey::MinValue),
                max: int(SettingKey::MaxValue),
                count: int(SettingKey::NumberCount),
            },
            dice: DiceParams {
                faces: int(SettingKey::DiceType),
                count: int(SettingKey::DiceCount),
            },
            coins: CoinParams {
                count: int(SettingKey::CoinCount),
            },
        }
    }

    /// Validates every kind's parameters and, only if all are valid, writes
    /// the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first invalid parameter;
    /// nothing is written in that case.
    pub fn save(&self, store: &dyn SettingsStore) -> Result<(), DomainError> {
        self.validate()?;

        store.set(SettingKey::WidgetType, self.kind.as_str().into());
        store.set(SettingKey::MinValue, self.range.min.into());
        store.set(SettingKey::MaxValue, self.range.max.into());
        store.set(SettingKey::NumberCount, self.range.count.into());
        store.set(SettingKey::DiceType, self.dice.faces.into());
        store.set(SettingKey::DiceCount, self.dice.count.into());
        store.set(SettingKey::CoinCount, self.coins.count.into());

        info!(kind = %self.kind, "saved widget configuration");
        Ok(())
    }

    /// Writes only the selected kind.
    pub fn save_kind(store: &dyn SettingsStore, kind: WidgetKind) {
        store.set(SettingKey::WidgetType, kind.as_str().into());
    }

    /// The request for the selected kind.
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        self.request_for(self.kind)
    }

    /// The request for `kind` built from this configuration.
    #[must_use]
    pub fn request_for(&self, kind: WidgetKind) -> GenerationRequest {
        match kind {
            WidgetKind::Numbers => GenerationRequest::Range {
                min: self.range.min,
                max: self.range.max,
                count: to_count(self.range.count),
            },
            WidgetKind::Dice => GenerationRequest::Dice {
                faces: u32::try_from(self.dice.faces).unwrap_or(0),
                count: to_count(self.dice.count),
            },
            WidgetKind::Coins => GenerationRequest::Coin {
                count: to_count(self.coins.count),
            },
        }
    }

    /// Generates a preview for the configurator without touching any store.
    ///
    /// # Errors
    ///
    /// Returns the generator's `DomainError` for invalid parameters.
    pub fn preview(&self, rng: &mut dyn DeterministicRng) -> Result<GenerationResult, DomainError> {
        generators::generate(rng, &self.request())
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_range(self.range.min, self.range.max, to_count(self.range.count))?;
        let faces = u32::try_from(self.dice.faces).unwrap_or(0);
        validate_dice(faces, to_count(self.dice.count))?;
        validate_coins(to_count(self.coins.count))?;
        Ok(())
    }
}

fn to_count(stored: i64) -> usize {
    usize::try_from(stored).unwrap_or(0)
}
