use crate::build_planning::domain::{BuildInfo, LinkCheck, LinkCheckResult, VerificationReport};
use crate::ports::outbound::LinkChecker;
use futures::future;
use futures::stream::{self, StreamExt};

/// VerifyLinksUseCase - Checks that every declared Dockerfile can be downloaded
///
/// Every check is issued, whatever the outcome of the others; callers decide
/// what to do with a report containing broken links.
///
/// # Type Parameters
/// * `C` - LinkChecker implementation
pub struct VerifyLinksUseCase<C: LinkChecker> {
    link_checker: C,
    max_concurrent_checks: usize,
}

impl<C: LinkChecker> VerifyLinksUseCase<C> {
    /// Creates a new VerifyLinksUseCase
    ///
    /// # Arguments
    /// * `link_checker` - Checker used for every URL
    /// * `max_concurrent_checks` - Upper bound of checks in flight; 0 is treated as 1
    pub fn new(link_checker: C, max_concurrent_checks: usize) -> Self {
        Self {
            link_checker,
            max_concurrent_checks: max_concurrent_checks.max(1),
        }
    }

    /// Checks the declared Dockerfiles of a single build
    pub async fn verify(&self, info: &BuildInfo) -> Vec<LinkCheckResult> {
        future::join_all(
            info.link_checks()
                .into_iter()
                .map(|check| self.run_check(check)),
        )
        .await
    }

    /// Checks the declared Dockerfiles of every build concurrently
    ///
    /// Returns once all checks completed. `on_progress(done, total)` is called
    /// after each completion. Results are returned in plan order: builds in
    /// the given order, architectures in column order.
    pub async fn verify_all<F>(&self, builds: &[BuildInfo], mut on_progress: F) -> VerificationReport
    where
        F: FnMut(usize, usize),
    {
        let checks: Vec<LinkCheck> = builds.iter().flat_map(BuildInfo::link_checks).collect();
        let total = checks.len();

        let mut pending = stream::iter(checks.into_iter().enumerate())
            .map(|(index, check)| async move { (index, self.run_check(check).await) })
            .buffer_unordered(self.max_concurrent_checks);

        let mut completed = Vec::with_capacity(total);
        while let Some(result) = pending.next().await {
            completed.push(result);
            on_progress(completed.len(), total);
        }

        completed.sort_by_key(|(index, _)| *index);
        VerificationReport::new(completed.into_iter().map(|(_, result)| result).collect())
    }

    async fn run_check(&self, check: LinkCheck) -> LinkCheckResult {
        let outcome = self.link_checker.check(check.url()).await;
        LinkCheckResult::new(check, outcome)
    }
}
