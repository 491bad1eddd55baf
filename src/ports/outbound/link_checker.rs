use crate::build_planning::domain::LinkOutcome;
use async_trait::async_trait;

/// LinkChecker port for probing whether a Dockerfile URL is reachable
///
/// # Async Support
/// Checks are issued concurrently, so implementations must be `Send + Sync`.
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// Probes one URL
    ///
    /// Never fails: transport errors and non-success statuses are both
    /// reported as [`LinkOutcome::Broken`] with a human readable reason.
    async fn check(&self, url: &str) -> LinkOutcome;
}

#[async_trait]
impl<T: LinkChecker + ?Sized> LinkChecker for &T {
    async fn check(&self, url: &str) -> LinkOutcome {
        (**self).check(url).await
    }
}
