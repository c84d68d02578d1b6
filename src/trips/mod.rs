//! Trip timer: a persisted singleton `Idle`/`Running` state machine.
//!
//! Only the start instant is persisted (epoch milliseconds under the trip
//! key). Elapsed time is always recomputed from the wall clock, so a trip in
//! progress survives a process restart. Finishing requires an explicit
//! confirmation; an unconfirmed finish changes nothing.
//!
//! While a trip is running, the timer owns a 1-second tokio task that
//! re-derives and logs the elapsed time. The task is spawned on the
//! Idle→Running transition (and on startup recovery) and aborted on
//! Running→Idle. It is a display cadence only, never a source of truth.

use std::sync::Mutex;

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::db::{keys, KvStore};
use crate::errors::AppError;

/// Snapshot of the trip state for display.
#[derive(Debug, Clone, Serialize)]
pub struct TripStatus {
    #[serde(rename = "enCurso")]
    pub running: bool,
    /// Start instant in epoch milliseconds, while running.
    #[serde(rename = "inicio", skip_serializing_if = "Option::is_none")]
    pub started_at_ms: Option<i64>,
    #[serde(rename = "segundos", skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<i64>,
    /// Elapsed time formatted `HH:MM:SS`.
    #[serde(rename = "tiempo", skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
}

/// Format a second count as `HH:MM:SS`.
pub fn format_elapsed(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

fn status_from(started_at_ms: Option<i64>) -> TripStatus {
    match started_at_ms {
        Some(start) => {
            let elapsed = ((Utc::now().timestamp_millis() - start) / 1000).max(0);
            TripStatus {
                running: true,
                started_at_ms: Some(start),
                elapsed_seconds: Some(elapsed),
                elapsed: Some(format_elapsed(elapsed)),
            }
        }
        None => TripStatus {
            running: false,
            started_at_ms: None,
            elapsed_seconds: None,
            elapsed: None,
        },
    }
}

/// The trip timer component. Singleton: a new trip overwrites any prior
/// in-progress marker; the state is not scoped per driver.
pub struct TripTimer {
    store: KvStore,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl TripTimer {
    pub fn new(store: KvStore) -> Self {
        Self {
            store,
            ticker: Mutex::new(None),
        }
    }

    /// The persisted start instant, if a trip is running. A malformed stored
    /// value is treated as no trip (logged, not surfaced).
    async fn start_instant(&self) -> Result<Option<i64>, AppError> {
        let raw = self.store.get(keys::TRIP_START).await?;
        Ok(raw.and_then(|json| {
            serde_json::from_str::<i64>(&json)
                .map_err(|err| {
                    tracing::warn!("Malformed trip start instant, treating as idle: {}", err);
                })
                .ok()
        }))
    }

    /// Current trip state with elapsed time recomputed from the wall clock.
    pub async fn status(&self) -> Result<TripStatus, AppError> {
        Ok(status_from(self.start_instant().await?))
    }

    /// Start a trip. A no-op while one is already running.
    pub async fn start(&self) -> Result<TripStatus, AppError> {
        if let Some(start) = self.start_instant().await? {
            tracing::info!("Trip already running, start ignored");
            return Ok(status_from(Some(start)));
        }

        let now = Utc::now().timestamp_millis();
        self.store
            .set(keys::TRIP_START, &serde_json::to_string(&now)?)
            .await?;
        self.spawn_ticker(now);
        tracing::info!(started_at_ms = now, "Trip started");
        Ok(status_from(Some(now)))
    }

    /// Finish the running trip. Two-phase: an unconfirmed call leaves the
    /// trip running. A no-op while idle.
    pub async fn finish(&self, confirmed: bool) -> Result<TripStatus, AppError> {
        let Some(start) = self.start_instant().await? else {
            return Ok(status_from(None));
        };

        if !confirmed {
            tracing::info!("Trip finish not confirmed, still running");
            return Ok(status_from(Some(start)));
        }

        self.store.remove(keys::TRIP_START).await?;
        self.stop_ticker();
        tracing::info!("Trip finished");
        Ok(status_from(None))
    }

    /// Restart the display ticker for a trip that was running when the
    /// process last stopped. Called once at startup.
    pub async fn resume(&self) -> Result<(), AppError> {
        if let Some(start) = self.start_instant().await? {
            tracing::info!(started_at_ms = start, "Resuming trip in progress");
            self.spawn_ticker(start);
        }
        Ok(())
    }

    fn spawn_ticker(&self, started_at_ms: i64) {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
            loop {
                interval.tick().await;
                let elapsed = ((Utc::now().timestamp_millis() - started_at_ms) / 1000).max(0);
                tracing::debug!(elapsed_seconds = elapsed, "Trip in progress");
            }
        });
        let mut guard = self.ticker.lock().expect("ticker lock poisoned");
        if let Some(old) = guard.replace(handle) {
            old.abort();
        }
    }

    fn stop_ticker(&self) {
        let mut guard = self.ticker.lock().expect("ticker lock poisoned");
        if let Some(handle) = guard.take() {
            handle.abort();
        }
    }
}

impl Drop for TripTimer {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
