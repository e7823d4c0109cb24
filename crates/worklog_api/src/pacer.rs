//! Keeps a client under the remote's request rate.
//!
//! Toggl allows about one request per second and answers bursts with `429` plus a
//! `Retry-After` header; a run issues one tag update per entry, so it has to be paced. The pacer
//! tracks the earliest moment the next request may leave, which is normally one interval after
//! the previous request and later when the server asked to back off.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

/// Upper bound for a server-requested pause; a misbehaving header must not stall a run for hours.
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct RequestPacer {
    interval: Duration,
    next_slot: Arc<Mutex<Option<Instant>>>,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits for the next free slot and books the one after it.
    pub async fn wait_turn(&self) {
        let mut slot = self.next_slot.lock().await;
        if let Some(at) = *slot {
            if at > Instant::now() {
                sleep_until(at).await;
            }
        }
        *slot = Some(Instant::now() + self.interval);
    }

    /// Pushes the next slot back by `delay` (capped at [`MAX_BACKOFF`]) unless it is already
    /// further out.
    pub async fn back_off(&self, delay: Duration) {
        let delay = delay.min(MAX_BACKOFF);
        let until = Instant::now() + delay;
        let mut slot = self.next_slot.lock().await;
        if slot.map_or(true, |at| at < until) {
            debug!("backing off for {:?}", delay);
            *slot = Some(until);
        }
    }
}

/// Reads a `Retry-After` value given in whole seconds. HTTP dates are not used by either API.
pub(crate) fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
