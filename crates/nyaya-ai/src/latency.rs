//! Injectable processing delay in front of answer generation.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// A pause awaited before an answer is produced.
///
/// Implementations must yield to the runtime rather than block the thread.
/// Dropping the returned future cancels the wait.
#[async_trait]
pub trait Latency: Send + Sync + Debug {
    async fn pause(&self);
}

/// No delay. Used in tests and when latency is configured as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Latency for NoDelay {
    async fn pause(&self) {}
}

/// A fixed delay on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Latency for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Strategy for a configured delay in milliseconds; zero means none.
pub fn from_millis(ms: u64) -> Arc<dyn Latency> {
    if ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_waits_on_timer() {
        let start = Instant::now();
        FixedDelay(Duration::from_millis(150)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_pauses_overlap() {
        let delay = FixedDelay(Duration::from_millis(100));
        let start = Instant::now();
        futures::future::join_all((0..10).map(|_| delay.pause())).await;
        // Ten concurrent waits take one delay, not ten.
        assert!(start.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn no_delay_returns() {
        NoDelay.pause().await;
    }

    #[test]
    fn zero_millis_is_no_delay() {
        assert!(format!("{:?}", from_millis(0)).contains("NoDelay"));
        assert!(format!("{:?}", from_millis(5)).contains("FixedDelay"));
    }
}
