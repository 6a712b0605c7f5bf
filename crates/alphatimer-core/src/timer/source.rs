//! Asynchronous tick source.
//!
//! [`TickSource`] owns the single countdown in flight: a driver task that
//! ticks a [`Countdown`] once per second and publishes the remaining value
//! through a `watch` cell. Subscribers only ever see the latest value;
//! there is no buffering.
//!
//! Cancellation model: `start()` replaces the driver task (abort) and bumps
//! a run generation. A driver compares its own generation against the
//! current one before every publish, so a callback that fires between
//! cancellation and abort is a no-op rather than a stray tick.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use super::countdown::{Countdown, TickOutcome, INITIAL_SECS};
use crate::events::Event;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Publishes the remaining whole seconds of the active countdown.
///
/// The published value is [`INITIAL_SECS`] while idle, then 5 down to 0 at
/// one-second spacing during a run, then [`INITIAL_SECS`] again on
/// completion. At most one countdown is ever in flight.
#[derive(Debug)]
pub struct TickSource {
    value_tx: Arc<watch::Sender<u8>>,
    /// Keeps the channel open so driver publishes cannot fail while the
    /// source is alive.
    _value_rx: watch::Receiver<u8>,
    events_tx: broadcast::Sender<Event>,
    /// Driver task of the current run; replaced wholesale on restart.
    handle: Option<JoinHandle<()>>,
    /// Fencing token: publishes from runs older than this are suppressed.
    generation: Arc<AtomicU64>,
}

impl TickSource {
    pub fn new() -> Self {
        let (value_tx, value_rx) = watch::channel(INITIAL_SECS);
        let (events_tx, _) = broadcast::channel(16);
        Self {
            value_tx: Arc::new(value_tx),
            _value_rx: value_rx,
            events_tx,
            handle: None,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Latest published RemainingSeconds.
    pub fn current(&self) -> u8 {
        *self._value_rx.borrow()
    }

    /// Observe the remaining-seconds cell.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.value_tx.subscribe()
    }

    /// Subscribe to the typed event stream (best-effort; lagging receivers
    /// skip ticks rather than stalling the driver).
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.events_tx.subscribe()
    }

    /// Cancel any in-flight countdown and begin a new 6-tick run.
    ///
    /// Idempotent when idle. The first tick is delivered immediately
    /// (publishing 5); `start()` itself publishes nothing, so a restart
    /// never flashes the idle value in between.
    pub fn start(&mut self) {
        let run = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        debug!(run, "starting countdown");

        let generation = Arc::clone(&self.generation);
        let value_tx = Arc::clone(&self.value_tx);
        let events_tx = self.events_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            drive(run, generation, value_tx, events_tx).await;
        }));
    }

    /// Cancel permanently. No further values or events are published.
    pub fn dispose(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("tick source disposed");
        }
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Driver for one countdown run.
///
/// Ticks the state machine at 1 Hz until completion, publishing after every
/// tick. Exits silently once its generation is stale.
async fn drive(
    run: u64,
    generation: Arc<AtomicU64>,
    value_tx: Arc<watch::Sender<u8>>,
    events_tx: broadcast::Sender<Event>,
) {
    let mut countdown = Countdown::new();
    countdown.start();
    let _ = events_tx.send(Event::CountdownStarted {
        duration_secs: INITIAL_SECS,
        at: Utc::now(),
    });

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    loop {
        // First iteration completes immediately, so the value drops to 5
        // as soon as the run begins; later ticks land at 1-second spacing.
        interval.tick().await;
        if generation.load(Ordering::SeqCst) != run {
            return;
        }
        match countdown.tick() {
            TickOutcome::Tick(secs) => {
                if value_tx.send(secs).is_err() {
                    return;
                }
                let _ = events_tx.send(Event::Tick {
                    remaining_secs: secs,
                    at: Utc::now(),
                });
                debug!(remaining = secs, "tick");
            }
            TickOutcome::Completed => {
                let _ = value_tx.send(INITIAL_SECS);
                let _ = events_tx.send(Event::CountdownCompleted { at: Utc::now() });
                debug!("countdown completed");
                return;
            }
            TickOutcome::Noop => return,
        }
    }
}
