//! Refresh loop standing in for the platform's widget timeline.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use randgen_core::clock::Clock;
use randgen_widget::refresher::SnapshotRefresher;
use tracing::{debug, info};

use crate::error::AppError;

/// Refreshes a snapshot, writes it to `out` as one JSON line, then sleeps
/// until the snapshot's `next_refresh_at`. Stops after `ticks` snapshots, or
/// when `shutdown` completes. Returns how many snapshots were written.
///
/// # Errors
///
/// Returns `AppError` if a snapshot cannot be encoded or written.
pub async fn run<W: Write>(
    refresher: &SnapshotRefresher,
    clock: &dyn Clock,
    ticks: Option<usize>,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
) -> Result<usize, AppError> {
    tokio::pin!(shutdown);
    let mut emitted = 0;

    loop {
        let snapshot = refresher.refresh(clock.now());
        serde_json::to_writer(&mut *out, &snapshot)?;
        out.write_all(b"\n")?;
        out.flush()?;
        emitted += 1;

        info!(
            kind = %snapshot.kind(),
            next_refresh_at = %snapshot.next_refresh_at(),
            "widget snapshot emitted"
        );

        if ticks.is_some_and(|limit| emitted >= limit) {
            break;
        }

        let wait = (snapshot.next_refresh_at() - clock.now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        debug!(wait_secs = wait.as_secs(), "waiting for next refresh");

        tokio::select! {
            () = tokio::time::sleep(wait) => {}
            () = &mut shutdown => {
                info!("shutdown requested");
                break;
            }
        }
    }

    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use std::future;
    use std::sync::{Arc, Mutex};

    use randgen_test_support::{FixedClock, MemoryStore, SequenceRng, fixed_time};

    use super::*;

    fn refresher(values: Vec<i64>) -> SnapshotRefresher {
        SnapshotRefresher::new(
            Arc::new(MemoryStore::new()),
            Arc::new(Mutex::new(SequenceRng::new(values))),
        )
    }

    #[tokio::test]
    async fn test_single_tick_writes_one_json_line() {
        let mut out = Vec::new();
        let emitted = run(
            &refresher(vec![4, 5, 6]),
            &FixedClock(fixed_time()),
            Some(1),
            &mut out,
            future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(emitted, 1);
        let text = String::from_utf8(out).unwrap();
        let line: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(line["result"]["kind"], "range");
        assert_eq!(line["result"]["values"], serde_json::json!([4, 5, 6]));
        assert_eq!(line["generated_at"], "2026-01-15T10:00:00Z");
    }

    #[tokio::test(start_paused = true)]
    async fn test_multiple_ticks_sleep_between_refreshes() {
        let mut out = Vec::new();
        let emitted = run(
            &refresher(vec![1, 2, 3, 7, 8, 9]),
            &FixedClock(fixed_time()),
            Some(2),
            &mut out,
            future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(emitted, 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn test_shutdown_stops_after_current_snapshot() {
        let mut out = Vec::new();
        let emitted = run(
            &refresher(vec![1, 2, 3]),
            &FixedClock(fixed_time()),
            None,
            &mut out,
            future::ready(()),
        )
        .await
        .unwrap();

        assert_eq!(emitted, 1);
    }
}
