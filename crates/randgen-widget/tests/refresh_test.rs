//! End-to-end widget flow: configurator saves, host refreshes.

use std::sync::{Arc, Mutex};

use randgen_core::rng::{DeterministicRng, SystemRng};
use randgen_core::settings::{SettingKey, SettingsStore};
use randgen_engine::domain::results::GenerationResult;
use randgen_test_support::{MemoryStore, MockRng, SequenceRng, UnavailableStore, fixed_time};
use randgen_widget::config::{WidgetConfig, WidgetKind};
use randgen_widget::file_store::{DEFAULT_NAMESPACE, JsonFileStore};
use randgen_widget::refresher::SnapshotRefresher;
use tempfile::TempDir;

fn shared_rng(
    rng: impl DeterministicRng + Send + 'static,
) -> Arc<Mutex<dyn DeterministicRng + Send>> {
    Arc::new(Mutex::new(rng))
}

#[test]
fn test_dice_kind_without_dice_type_uses_six_faces() {
    let store: Arc<dyn SettingsStore> = Arc::new(MemoryStore::with_entries([(
        SettingKey::WidgetType,
        "dice".into(),
    )]));
    let refresher = SnapshotRefresher::new(store, shared_rng(SystemRng::seeded(8)));

    for _ in 0..200 {
        let snapshot = refresher.refresh(fixed_time());
        let GenerationResult::Dice(dice) = snapshot.result() else {
            panic!("expected dice, got {:?}", snapshot.kind());
        };
        assert_eq!(dice.values().len(), 2);
        assert!(dice.values().iter().all(|v| (1..=6).contains(v)));
    }
}

#[test]
fn test_bogus_widget_type_behaves_like_numbers() {
    let bogus: Arc<dyn SettingsStore> = Arc::new(MemoryStore::with_entries([(
        SettingKey::WidgetType,
        "bogus".into(),
    )]));
    let numbers: Arc<dyn SettingsStore> = Arc::new(MemoryStore::with_entries([(
        SettingKey::WidgetType,
        "numbers".into(),
    )]));

    let from_bogus =
        SnapshotRefresher::new(bogus, shared_rng(SystemRng::seeded(21))).refresh(fixed_time());
    let from_numbers =
        SnapshotRefresher::new(numbers, shared_rng(SystemRng::seeded(21))).refresh(fixed_time());

    assert_eq!(from_bogus, from_numbers);
    assert_eq!(from_bogus.kind(), WidgetKind::Numbers);
}

#[test]
fn test_unavailable_store_still_produces_snapshot() {
    let refresher = SnapshotRefresher::new(Arc::new(UnavailableStore), shared_rng(MockRng));
    let snapshot = refresher.refresh(fixed_time());

    assert_eq!(snapshot.kind(), WidgetKind::Numbers);
    assert_eq!(snapshot.result().to_string(), "1, 1, 1");
}

#[test]
fn test_refresh_is_repeatable_for_same_store_contents() {
    let store: Arc<dyn SettingsStore> = Arc::new(MemoryStore::new());
    let first = SnapshotRefresher::new(store.clone(), shared_rng(SystemRng::seeded(4)))
        .refresh(fixed_time());
    let second =
        SnapshotRefresher::new(store, shared_rng(SystemRng::seeded(4))).refresh(fixed_time());

    assert_eq!(first, second);
}

#[test]
fn test_configurator_and_host_share_file_store() {
    let dir = TempDir::new().unwrap();
    let app = JsonFileStore::open(dir.path(), DEFAULT_NAMESPACE);

    let mut config = WidgetConfig::load(&app);
    config.kind = WidgetKind::Coins;
    config.coins.count = 5;
    config.save(&app).unwrap();

    let host: Arc<dyn SettingsStore> = Arc::new(JsonFileStore::open(dir.path(), DEFAULT_NAMESPACE));
    let flips = SequenceRng::default().with_flips(vec![true, false, false, true, true]);
    let snapshot = SnapshotRefresher::new(host, shared_rng(flips)).refresh(fixed_time());

    let GenerationResult::Coin(coins) = snapshot.result() else {
        panic!("expected coins, got {:?}", snapshot.kind());
    };
    assert_eq!(coins.heads_count(), 3);
    assert_eq!(coins.tails_count(), 2);
    assert_eq!(
        snapshot.next_refresh_at(),
        fixed_time() + chrono::TimeDelta::minutes(15)
    );
}

#[test]
fn test_later_configuration_supersedes_earlier() {
    let store = Arc::new(MemoryStore::new());

    let mut config = WidgetConfig::default();
    config.kind = WidgetKind::Dice;
    config.save(store.as_ref()).unwrap();
    WidgetConfig::save_kind(store.as_ref(), WidgetKind::Numbers);

    let rng = shared_rng(SequenceRng::new(vec![1, 2, 3]));
    let snapshot = SnapshotRefresher::new(store, rng).refresh(fixed_time());
    assert_eq!(snapshot.kind(), WidgetKind::Numbers);
}
