use async_trait::async_trait;
use dockerfile_build_helper::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock LinkChecker that reports every URL reachable unless marked broken
#[derive(Default, Clone)]
pub struct MockLinkChecker {
    broken: HashSet<String>,
    pub checked: Arc<Mutex<Vec<String>>>,
}

impl MockLinkChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broken(mut self, url: &str) -> Self {
        self.broken.insert(url.to_string());
        self
    }

    pub fn checked_urls(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkChecker for MockLinkChecker {
    async fn check(&self, url: &str) -> LinkOutcome {
        self.checked.lock().unwrap().push(url.to_string());
        if self.broken.contains(url) {
            LinkOutcome::Broken {
                reason: "HTTP 404 Not Found".to_string(),
            }
        } else {
            LinkOutcome::Reachable
        }
    }
}
