//! Waiting for the catalog to catch up after a write.
//!
//! Newly created resources take a few seconds to show up in search results.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::settings::WaitWindow;

/// Upper bound for a polling deadline that would not fit in an `Instant`.
const MAX_DEADLINE_SECS: u64 = 365 * 24 * 60 * 60;

/// Pauses a sync run.
#[async_trait]
pub trait Waiter: Send + Sync {
    /// Waits for some time within `window`, announcing `message`.
    async fn wait(&self, window: WaitWindow, message: &str);
}

/// Sleeps a uniformly random duration within the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct JitteredWaiter;

#[async_trait]
impl Waiter for JitteredWaiter {
    async fn wait(&self, window: WaitWindow, message: &str) {
        let delay = jittered_delay(window);
        info!("{} ({:.1}s)", message, delay.as_secs_f64());
        sleep(delay).await;
    }
}

fn jittered_delay(window: WaitWindow) -> Duration {
    if window.max_secs <= window.min_secs {
        return Duration::from_secs(window.min_secs);
    }
    let min_millis = window.min_secs.saturating_mul(1000);
    let max_millis = window.max_secs.saturating_mul(1000);
    Duration::from_millis(rand::thread_rng().gen_range(min_millis..=max_millis))
}

/// Polls `predicate` until it holds or `window.max_secs` have passed.
///
/// The predicate is checked immediately and then once every
/// `window.min_secs` (at least one second). Returns whether it held.
pub async fn wait_until<F, Fut>(window: WaitWindow, message: &str, mut predicate: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    info!("{}", message);
    let interval = Duration::from_secs(window.min_secs.max(1));
    let start = Instant::now();
    let deadline = start
        .checked_add(Duration::from_secs(window.max_secs))
        .unwrap_or_else(|| start + Duration::from_secs(MAX_DEADLINE_SECS));
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        if predicate().await {
            debug!(attempt, "wait condition met");
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            debug!(attempt, "wait condition not met before deadline");
            return false;
        }
        sleep(interval.min(deadline - now)).await;
    }
}
