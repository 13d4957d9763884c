//! Periodic snapshot refresh.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use randgen_core::rng::DeterministicRng;
use randgen_core::settings::SettingsStore;
use randgen_engine::domain::generators;
use randgen_engine::domain::results::{GenerationResult, RangeResult};
use tracing::{debug, instrument, warn};

use crate::config::WidgetConfig;
use crate::snapshot::Snapshot;

/// Values shown while the host lays out a widget that has no data yet.
const PLACEHOLDER_VALUES: [i64; 3] = [42, 17, 23];

/// Values shown in the widget gallery preview.
const SAMPLE_VALUES: [i64; 3] = [7, 13, 42];

/// Produces widget snapshots from the shared configuration.
///
/// Holds the store for reading only; every call is independent of the
/// previous one.
#[derive(Clone)]
pub struct SnapshotRefresher {
    store: Arc<dyn SettingsStore>,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
}

impl SnapshotRefresher {
    /// Create a refresher over `store`, drawing from `rng`.
    #[must_use]
    pub fn new(
        store: Arc<dyn SettingsStore>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Self {
        Self { store, rng }
    }

    /// Reads the configuration, runs the selected generator and stamps the
    /// result with `now`.
    ///
    /// Stored parameters the generator rejects are replaced by the defaults
    /// for the same kind, so a snapshot is always produced.
    #[instrument(skip(self))]
    pub fn refresh(&self, now: DateTime<Utc>) -> Snapshot {
        let config = WidgetConfig::load(self.store.as_ref());
        let request = config.request();

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let result = match generators::generate(&mut *rng, &request) {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    kind = %config.kind,
                    error = %err,
                    "stored widget parameters rejected, using defaults"
                );
                let fallback = WidgetConfig::default().request_for(config.kind);
                generators::generate(&mut *rng, &fallback)
                    .unwrap_or_else(|_| placeholder_result())
            }
        };
        drop(rng);

        debug!(kind = %config.kind, count = result.len(), "refreshed widget snapshot");
        Snapshot::new(now, result)
    }

    /// Sample data for laying out the widget before any refresh.
    #[must_use]
    pub fn placeholder(now: DateTime<Utc>) -> Snapshot {
        Snapshot::new(now, placeholder_result())
    }

    /// Sample data for a quick preview, such as the widget gallery.
    #[must_use]
    pub fn sample(now: DateTime<Utc>) -> Snapshot {
        Snapshot::new(
            now,
            GenerationResult::Range(RangeResult::from_values(SAMPLE_VALUES.to_vec())),
        )
    }
}

impl std::fmt::Debug for SnapshotRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotRefresher").finish_non_exhaustive()
    }
}

fn placeholder_result() -> GenerationResult {
    GenerationResult::Range(RangeResult::from_values(PLACEHOLDER_VALUES.to_vec()))
}

#[cfg(test)]
mod tests {
    use randgen_core::settings::SettingKey;
    use randgen_test_support::{MemoryStore, MockRng, SequenceRng, fixed_time};

    use super::*;
    use crate::config::WidgetKind;

    fn refresher(store: Arc<MemoryStore>, rng: SequenceRng) -> SnapshotRefresher {
        SnapshotRefresher::new(store, Arc::new(Mutex::new(rng)))
    }

    #[test]
    fn test_empty_store_refreshes_default_numbers() {
        let store = Arc::new(MemoryStore::new());
        let snapshot = refresher(store, SequenceRng::new(vec![5, 50, 95])).refresh(fixed_time());

        assert_eq!(snapshot.kind(), WidgetKind::Numbers);
        assert_eq!(snapshot.result().to_string(), "5, 50, 95");
        assert_eq!(snapshot.generated_at(), fixed_time());
    }

    #[test]
    fn test_malformed_range_falls_back_to_default_range() {
        let store = Arc::new(MemoryStore::with_entries([
            (SettingKey::MinValue, 9.into()),
            (SettingKey::MaxValue, 3.into()),
        ]));
        let snapshot = refresher(store, SequenceRng::new(vec![1, 2, 3])).refresh(fixed_time());

        assert_eq!(snapshot.kind(), WidgetKind::Numbers);
        assert_eq!(snapshot.result().len(), 3);
    }

    #[test]
    fn test_zero_coin_count_falls_back_to_default_coins() {
        let store = Arc::new(MemoryStore::with_entries([
            (SettingKey::WidgetType, "coins".into()),
            (SettingKey::CoinCount, 0.into()),
        ]));
        let rng = SequenceRng::default().with_flips(vec![true, true, false]);
        let snapshot = refresher(store, rng).refresh(fixed_time());

        assert_eq!(snapshot.kind(), WidgetKind::Coins);
        assert_eq!(snapshot.result().len(), 3);
    }

    #[test]
    fn test_huge_number_count_falls_back_to_default_range() {
        let store = Arc::new(MemoryStore::with_entries([(
            SettingKey::NumberCount,
            i64::MAX.into(),
        )]));
        let snapshot = refresher(store, SequenceRng::new(vec![8, 9, 10])).refresh(fixed_time());

        assert_eq!(snapshot.kind(), WidgetKind::Numbers);
        assert_eq!(snapshot.result().to_string(), "8, 9, 10");
    }

    #[test]
    fn test_number_count_boundary_on_refresh() {
        let at_limit = Arc::new(MemoryStore::with_entries([(
            SettingKey::NumberCount,
            10.into(),
        )]));
        let snapshot =
            refresher(at_limit, SequenceRng::new((1..=10).collect())).refresh(fixed_time());
        assert_eq!(snapshot.result().len(), 10);

        let over_limit = Arc::new(MemoryStore::with_entries([(
            SettingKey::NumberCount,
            11.into(),
        )]));
        let snapshot = refresher(over_limit, SequenceRng::new(vec![1, 2, 3])).refresh(fixed_time());
        assert_eq!(snapshot.result().len(), 3);
    }

    #[test]
    fn test_huge_dice_count_falls_back_to_default_dice() {
        let store = Arc::new(MemoryStore::with_entries([
            (SettingKey::WidgetType, "dice".into()),
            (SettingKey::DiceCount, i64::MAX.into()),
        ]));
        let snapshot = refresher(store, SequenceRng::new(vec![2, 4])).refresh(fixed_time());

        assert_eq!(snapshot.kind(), WidgetKind::Dice);
        assert_eq!(snapshot.result().to_string(), "2, 4 (Total: 6)");
    }

    #[test]
    fn test_refresh_never_writes() {
        let store = Arc::new(MemoryStore::new());
        let refresher = SnapshotRefresher::new(store.clone(), Arc::new(Mutex::new(MockRng)));

        refresher.refresh(fixed_time());
        refresher.refresh(fixed_time());

        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_placeholder_and_sample_are_fixed_numbers() {
        let placeholder = SnapshotRefresher::placeholder(fixed_time());
        let sample = SnapshotRefresher::sample(fixed_time());
        assert_eq!(placeholder.result().to_string(), "42, 17, 23");
        assert_eq!(sample.result().to_string(), "7, 13, 42");
    }
}
