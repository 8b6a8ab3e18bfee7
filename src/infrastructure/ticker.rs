//! Widget-owned periodic timers
//!
//! A [`Ticker`] sends a fixed message on a fixed period until it is dropped.
//! Components hold one while they animate and let it go when they pause,
//! finish or are torn down, so no tick can outlive its owner.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    cancellation_token: CancellationToken,
}

impl Ticker {
    /// Spawn a ticker on the current tokio runtime.
    ///
    /// The first message is sent one `period` after spawning. The task stops
    /// on drop or when the receiving side is closed.
    pub fn spawn<M>(period: Duration, tx: UnboundedSender<M>, message: M) -> Self
    where
        M: Clone + Send + 'static,
    {
        let cancellation_token = CancellationToken::new();
        let token = cancellation_token.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(message.clone()).is_err() {
                            log::debug!("Ticker receiver closed, stopping");
                            break;
                        }
                    }
                }
            }
        });
        Self {
            period,
            cancellation_token,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
    }
}
