use crate::build_planning::domain::ImageReference;
use std::path::PathBuf;

/// Images that are always built, ahead of anything found in the fragments
pub const BOOTSTRAP_IMAGES: [&str; 2] = [
    "btcpayserver/docker-compose-generator",
    "btcpayserver/docker-compose-builder:1.24.1",
];

/// Upper bound on link checks in flight when nothing else is configured
pub const DEFAULT_MAX_CONCURRENT_CHECKS: usize = 32;

/// GenerateRequest - Internal request DTO for the generation use case
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory holding the docker-compose fragments
    pub fragments_dir: PathBuf,
    /// Images resolved before the scanned ones, in this order
    pub bootstrap_images: Vec<ImageReference>,
    /// Maximum number of link checks in flight at once
    pub max_concurrent_checks: usize,
}

impl GenerateRequest {
    pub fn new(fragments_dir: PathBuf) -> Self {
        Self {
            fragments_dir,
            bootstrap_images: BOOTSTRAP_IMAGES
                .into_iter()
                .map(ImageReference::parse)
                .collect(),
            max_concurrent_checks: DEFAULT_MAX_CONCURRENT_CHECKS,
        }
    }

    pub fn with_max_concurrent_checks(mut self, max_concurrent_checks: usize) -> Self {
        self.max_concurrent_checks = max_concurrent_checks;
        self
    }

    pub fn with_bootstrap_images(mut self, bootstrap_images: Vec<ImageReference>) -> Self {
        self.bootstrap_images = bootstrap_images;
        self
    }
}
