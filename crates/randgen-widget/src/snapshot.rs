//! Timestamped widget results.

use chrono::{DateTime, TimeDelta, Utc};
use randgen_engine::domain::results::GenerationResult;
use serde::Serialize;

use crate::config::WidgetKind;

/// Minutes between widget refreshes.
pub const REFRESH_INTERVAL_MINUTES: i64 = 15;

/// The delay between a snapshot and the next refresh.
#[must_use]
pub fn refresh_interval() -> TimeDelta {
    TimeDelta::minutes(REFRESH_INTERVAL_MINUTES)
}

/// One generation result for the widget to render, and when to replace it.
///
/// Snapshots are never updated; the next tick produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    generated_at: DateTime<Utc>,
    result: GenerationResult,
    next_refresh_at: DateTime<Utc>,
}

impl Snapshot {
    /// Wraps `result`, scheduling the next refresh one interval after
    /// `generated_at`.
    #[must_use]
    pub fn new(generated_at: DateTime<Utc>, result: GenerationResult) -> Self {
        Self {
            generated_at,
            result,
            next_refresh_at: generated_at + refresh_interval(),
        }
    }

    /// When the result was generated.
    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// The result to render.
    #[must_use]
    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    /// When the host should ask for the next snapshot.
    #[must_use]
    pub fn next_refresh_at(&self) -> DateTime<Utc> {
        self.next_refresh_at
    }

    /// The widget kind the result belongs to.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.result.kind().into()
    }
}

#[cfg(test)]
mod tests {
    use randgen_engine::domain::results::CoinResult;
    use randgen_test_support::fixed_time;

    use super::*;

    #[test]
    fn test_next_refresh_is_fifteen_minutes_later() {
        let now = fixed_time();
        let snapshot = Snapshot::new(
            now,
            GenerationResult::Coin(CoinResult::from_outcomes(vec![true])),
        );
        assert_eq!(snapshot.generated_at(), now);
        assert_eq!(snapshot.next_refresh_at() - now, TimeDelta::minutes(15));
        assert_eq!(snapshot.kind(), WidgetKind::Coins);
    }

    #[test]
    fn test_snapshot_serializes_result_with_kind() {
        let snapshot = Snapshot::new(
            fixed_time(),
            GenerationResult::Coin(CoinResult::from_outcomes(vec![true, false])),
        );
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["result"]["kind"], "coin");
        assert_eq!(json["result"]["heads_count"], 1);
        assert_eq!(json["next_refresh_at"], "2026-01-15T10:15:00Z");
    }
}
