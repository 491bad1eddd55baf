use super::Architecture;
use crate::shared::error::BrokenLink;

/// A planned reachability check of one Dockerfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck {
    image: String,
    architecture: Architecture,
    path: String,
    url: String,
}

impl LinkCheck {
    pub fn new(image: String, architecture: Architecture, path: String, url: String) -> Self {
        Self {
            image,
            architecture,
            path,
            url,
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Result of requesting a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Reachable,
    Broken { reason: String },
}

impl LinkOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, LinkOutcome::Reachable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheckResult {
    pub check: LinkCheck,
    pub outcome: LinkOutcome,
}

impl LinkCheckResult {
    pub fn new(check: LinkCheck, outcome: LinkOutcome) -> Self {
        Self { check, outcome }
    }

    pub fn is_reachable(&self) -> bool {
        self.outcome.is_reachable()
    }
}

/// Aggregate of every link check of a run
///
/// Results are stored in completion order, which is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    results: Vec<LinkCheckResult>,
}

impl VerificationReport {
    pub fn new(results: Vec<LinkCheckResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[LinkCheckResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn all_reachable(&self) -> bool {
        self.results.iter().all(LinkCheckResult::is_reachable)
    }

    /// True only when the URL was checked and found reachable
    pub fn is_reachable(&self, url: &str) -> bool {
        self.results
            .iter()
            .any(|result| result.check.url() == url && result.is_reachable())
    }

    pub fn broken(&self) -> Vec<BrokenLink> {
        self.results
            .iter()
            .filter_map(|result| match &result.outcome {
                LinkOutcome::Reachable => None,
                LinkOutcome::Broken { reason } => Some(BrokenLink {
                    image: result.check.image().to_string(),
                    url: result.check.url().to_string(),
                    reason: reason.clone(),
                }),
            })
            .collect()
    }
}
