//! Settings store abstraction.
//!
//! The widget configuration lives in a key-value namespace shared between the
//! interactive application (the writer) and the periodic widget host (the
//! reader). Every key has a documented default, so a read never fails: an
//! absent key, a value of the wrong scalar type, or an unreachable store all
//! resolve to the default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Keys of the shared widget configuration namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    /// Selected generator kind: `"numbers"`, `"dice"` or `"coins"`.
    WidgetType,
    /// Lower bound of the numbers generator.
    MinValue,
    /// Upper bound of the numbers generator.
    MaxValue,
    /// How many numbers to generate.
    NumberCount,
    /// How many dice to roll.
    DiceCount,
    /// Face count of each die.
    DiceType,
    /// How many coins to flip.
    CoinCount,
}

impl SettingKey {
    /// Every key, in persisted order.
    pub const ALL: [Self; 7] = [
        Self::WidgetType,
        Self::MinValue,
        Self::MaxValue,
        Self::NumberCount,
        Self::DiceCount,
        Self::DiceType,
        Self::CoinCount,
    ];

    /// The name under which the key is persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WidgetType => "widgetType",
            Self::MinValue => "minValue",
            Self::MaxValue => "maxValue",
            Self::NumberCount => "numberCount",
            Self::DiceCount => "diceCount",
            Self::DiceType => "diceType",
            Self::CoinCount => "coinCount",
        }
    }

    /// The value a read resolves to when nothing usable is stored.
    #[must_use]
    pub fn default_value(self) -> SettingValue {
        match self {
            Self::WidgetType => SettingValue::Text("numbers".to_owned()),
            Self::MinValue => SettingValue::Int(1),
            Self::MaxValue => SettingValue::Int(100),
            Self::NumberCount | Self::CoinCount => SettingValue::Int(3),
            Self::DiceCount => SettingValue::Int(2),
            Self::DiceType => SettingValue::Int(6),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar stored under a [`SettingKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// An integer setting.
    Int(i64),
    /// A string setting.
    Text(String),
}

impl SettingValue {
    /// Returns the integer, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Returns the string, if this is a string value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Int(_) => None,
        }
    }

    fn same_shape(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Int(_), Self::Int(_)) | (Self::Text(_), Self::Text(_))
        )
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Durable key-value store for widget configuration.
///
/// Implementations use interior mutability; last write wins and there is no
/// locking across processes. An implementation that cannot reach its backing
/// namespace returns `None` from [`read`](Self::read) and ignores
/// [`write`](Self::write).
pub trait SettingsStore: Send + Sync {
    /// Returns the raw stored value, or `None` if nothing is stored.
    fn read(&self, key: SettingKey) -> Option<SettingValue>;

    /// Overwrites the stored value. Durable once this returns.
    fn write(&self, key: SettingKey, value: SettingValue);

    /// Returns the stored value, substituting the key's default when the key
    /// is absent or holds the wrong scalar type.
    fn get(&self, key: SettingKey) -> SettingValue {
        let default = key.default_value();
        match self.read(key) {
            Some(value) if value.same_shape(&default) => value,
            _ => default,
        }
    }

    /// Integer accessor over [`get`](Self::get).
    fn get_int(&self, key: SettingKey) -> i64 {
        self.get(key).as_int().unwrap_or_default()
    }

    /// String accessor over [`get`](Self::get).
    fn get_text(&self, key: SettingKey) -> String {
        match self.get(key) {
            SettingValue::Text(v) => v,
            SettingValue::Int(v) => v.to_string(),
        }
    }

    /// Stores `value` under `key`.
    fn set(&self, key: SettingKey, value: SettingValue) {
        self.write(key, value);
    }
}
