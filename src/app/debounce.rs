//! Trailing-edge input debouncing.
//!
//! A typing burst must produce one catalog search, not one per keystroke.
//! `Debouncer` runs a small background task: every update resets a
//! quiet-period timer, and only a timer that runs out un-reset forwards
//! the latest value to the output channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::error::{CinetrendError, Result};

/// Quiet period before a pending query is released.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

pub struct Debouncer {
    tx: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn a debounce stage with the given quiet period.
    ///
    /// Values fed through [`update`](Self::update) appear on the returned
    /// receiver only once input has been stable for `delay`; a burst
    /// collapses to its last value. Dropping the `Debouncer` cancels any
    /// pending emission and stops the task.
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_loop(delay, rx, out_tx));
        (Self { tx, task }, out_rx)
    }

    /// Feed the latest input value, resetting the quiet-period timer.
    pub fn update(&self, value: impl Into<String>) -> Result<()> {
        self.tx
            .send(value.into())
            .map_err(|_| CinetrendError::ChannelClosed)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_loop(
    delay: Duration,
    mut rx: mpsc::UnboundedReceiver<String>,
    out: mpsc::UnboundedSender<String>,
) {
    let mut pending: Option<String> = None;
    loop {
        match pending.take() {
            // Quiet-period timer armed: a newer value resets it, a full
            // timeout releases the value downstream.
            Some(value) => match timeout(delay, rx.recv()).await {
                Ok(Some(newer)) => pending = Some(newer),
                Ok(None) => break,
                Err(_) => {
                    if out.send(value).is_err() {
                        break;
                    }
                }
            },
            None => match rx.recv().await {
                Some(value) => pending = Some(value),
                None => break,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;
    use tokio_test::assert_ok;

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (debouncer, mut rx) = Debouncer::spawn(Duration::from_millis(1000));

        assert_ok!(debouncer.update("s"));
        assert_ok!(debouncer.update("sp"));
        assert_ok!(debouncer.update("spirited"));
        yield_now().await;

        advance(Duration::from_millis(999)).await;
        yield_now().await;
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(2)).await;
        yield_now().await;
        assert_eq!(rx.try_recv().unwrap(), "spirited");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_input_resets_the_quiet_period() {
        let (debouncer, mut rx) = Debouncer::spawn(Duration::from_millis(1000));

        assert_ok!(debouncer.update("a"));
        yield_now().await;
        advance(Duration::from_millis(800)).await;
        yield_now().await;

        assert_ok!(debouncer.update("ab"));
        yield_now().await;
        advance(Duration::from_millis(800)).await;
        yield_now().await;
        // 1600ms since the first update, but only 800ms of quiet.
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(300)).await;
        yield_now().await;
        assert_eq!(rx.try_recv().unwrap(), "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_again_after_a_release() {
        let (debouncer, mut rx) = Debouncer::spawn(Duration::from_millis(100));

        assert_ok!(debouncer.update("first"));
        yield_now().await;
        advance(Duration::from_millis(150)).await;
        yield_now().await;
        assert_eq!(rx.try_recv().unwrap(), "first");

        assert_ok!(debouncer.update("second"));
        yield_now().await;
        advance(Duration::from_millis(150)).await;
        yield_now().await;
        assert_eq!(rx.try_recv().unwrap(), "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_emission() {
        let (debouncer, mut rx) = Debouncer::spawn(Duration::from_millis(1000));

        assert_ok!(debouncer.update("doomed"));
        yield_now().await;
        drop(debouncer);

        advance(Duration::from_millis(1500)).await;
        yield_now().await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_fails_once_the_stage_is_gone() {
        let (debouncer, rx) = Debouncer::spawn(Duration::from_millis(100));
        drop(rx);

        // Still accepted: the stage only notices on the next release.
        assert_ok!(debouncer.update("x"));
        yield_now().await;
        advance(Duration::from_millis(150)).await;
        yield_now().await;

        let result = debouncer.update("y");
        assert!(matches!(result, Err(CinetrendError::ChannelClosed)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_input_passes_through_unchanged() {
        let (debouncer, mut rx) = Debouncer::spawn(DEFAULT_DEBOUNCE);

        assert_ok!(debouncer.update("akira"));
        yield_now().await;
        advance(DEFAULT_DEBOUNCE).await;
        advance(Duration::from_millis(1)).await;
        yield_now().await;

        assert_eq!(rx.try_recv().unwrap(), "akira");
    }
}
