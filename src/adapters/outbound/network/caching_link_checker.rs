use crate::build_planning::domain::LinkOutcome;
use crate::ports::outbound::LinkChecker;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingLinkChecker wraps a LinkChecker and remembers every outcome by URL.
///
/// Several images share Dockerfiles (nginx declares the same file for all
/// three architectures), so a run would otherwise probe the same URL
/// repeatedly. The cache is thread-safe and suitable for concurrent access.
///
/// Two concurrent checks of the same uncached URL may both reach the inner
/// checker; the outcome is the same either way.
pub struct CachingLinkChecker<C: LinkChecker> {
    inner: C,
    cache: Arc<DashMap<String, LinkOutcome>>,
}

impl<C: LinkChecker> CachingLinkChecker<C> {
    /// Creates a new caching checker wrapping the given inner checker
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<C: LinkChecker> LinkChecker for CachingLinkChecker<C> {
    async fn check(&self, url: &str) -> LinkOutcome {
        if let Some(cached) = self.cache.get(url) {
            return cached.clone();
        }

        let outcome = self.inner.check(url).await;
        self.cache.insert(url.to_string(), outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock checker for testing that tracks call counts
    struct MockLinkChecker {
        call_count: AtomicUsize,
    }

    impl MockLinkChecker {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LinkChecker for MockLinkChecker {
        async fn check(&self, url: &str) -> LinkOutcome {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if url.ends_with("missing.Dockerfile") {
                LinkOutcome::Broken {
                    reason: "HTTP 404 Not Found".to_string(),
                }
            } else {
                LinkOutcome::Reachable
            }
        }
    }

    #[tokio::test]
    async fn test_caching_checker_returns_cached_outcome() {
        let checker = CachingLinkChecker::new(MockLinkChecker::new());
        let url = "https://github.com/nginxinc/docker-nginx/raw/1.16/stable/stretch/Dockerfile";

        assert!(checker.check(url).await.is_reachable());
        assert_eq!(checker.inner.get_call_count(), 1);

        assert!(checker.check(url).await.is_reachable());
        assert_eq!(checker.inner.get_call_count(), 1);
        assert_eq!(checker.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_caching_checker_caches_broken_outcomes() {
        let checker = CachingLinkChecker::new(MockLinkChecker::new());
        let url = "https://github.com/acme/repo/raw/v1/missing.Dockerfile";

        let first = checker.check(url).await;
        let second = checker.check(url).await;

        assert_eq!(first, second);
        assert!(!second.is_reachable());
        assert_eq!(checker.inner.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_caching_checker_different_urls_cached_separately() {
        let checker = CachingLinkChecker::new(MockLinkChecker::new());

        checker.check("https://github.com/a/b/raw/v1/Dockerfile").await;
        checker.check("https://github.com/a/b/raw/v2/Dockerfile").await;

        assert_eq!(checker.inner.get_call_count(), 2);
        assert_eq!(checker.cache_size(), 2);
    }
}
