//! Pacing between paginated requests
//!
//! The delay is a rate-limit courtesy, so it is injectable: production uses
//! [`TokioPacer`], tests swap in [`NoPacer`] or a recording implementation.

use crate::{KeywordError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Suspends the pagination loop between pages
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Waits for `duration`, returning `Err(Cancelled)` if the token fires first
    async fn pause(&self, duration: Duration, cancel: &CancellationToken) -> Result<()>;
}

/// Sleeps on the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            _ = cancel.cancelled() => Err(KeywordError::Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacer;

#[async_trait]
impl Pacer for NoPacer {
    async fn pause(&self, _duration: Duration, cancel: &CancellationToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(KeywordError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_pacer_waits() {
        let cancel = CancellationToken::new();
        let start = Instant::now();

        TokioPacer
            .pause(Duration::from_millis(50), &cancel)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_tokio_pacer_cancelled_mid_pause() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let start = Instant::now();
        let result = TokioPacer.pause(Duration::from_secs(10), &cancel).await;

        assert!(matches!(result, Err(KeywordError::Cancelled)));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_no_pacer() {
        let cancel = CancellationToken::new();
        assert!(NoPacer.pause(Duration::from_secs(10), &cancel).await.is_ok());

        cancel.cancel();
        assert!(matches!(
            NoPacer.pause(Duration::ZERO, &cancel).await,
            Err(KeywordError::Cancelled)
        ));
    }
}
