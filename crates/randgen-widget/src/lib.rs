//! Randgen Widget — the home-screen widget side of the generators.
//!
//! The interactive configurator saves a [`WidgetConfig`](config::WidgetConfig)
//! into a [`SettingsStore`](randgen_core::settings::SettingsStore) shared with
//! the widget host. On every host tick the
//! [`SnapshotRefresher`](refresher::SnapshotRefresher) reads that
//! configuration, runs the matching generator and hands back a timestamped
//! [`Snapshot`](snapshot::Snapshot). The refresher never writes to the store.

pub mod config;
pub mod file_store;
pub mod refresher;
pub mod snapshot;
