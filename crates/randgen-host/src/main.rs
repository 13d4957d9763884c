//! Randgen widget host entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use randgen_core::clock::SystemClock;
use randgen_core::rng::{DeterministicRng, SystemRng};
use randgen_host::config::HostConfig;
use randgen_host::host;
use randgen_widget::file_store::JsonFileStore;
use randgen_widget::refresher::SnapshotRefresher;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries the snapshots.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting randgen widget host");

    let config = HostConfig::from_env()?;

    let store = Arc::new(JsonFileStore::open(&config.store_dir, &config.namespace));
    let rng = config.seed.map_or_else(SystemRng::from_os_rng, SystemRng::seeded);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let refresher = SnapshotRefresher::new(store, rng);

    tracing::info!(
        store_dir = %config.store_dir.display(),
        namespace = %config.namespace,
        "widget host ready"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let emitted = host::run(&refresher, &SystemClock, config.ticks, &mut stdout, shutdown).await?;

    tracing::info!(emitted, "widget host stopped");
    Ok(())
}
