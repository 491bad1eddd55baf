use crate::build_planning::domain::{BuildInfo, ImageReference, VerificationReport};

/// GenerateResponse - Internal response DTO from the generation use case
///
/// Only produced when every image resolved and every declared Dockerfile
/// link was reachable; adapters render the outputs from it.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// Verified builds in resolution order (bootstrap images first)
    pub builds: Vec<BuildInfo>,
    /// Images present in the table but with no Dockerfile for any architecture
    pub skipped: Vec<ImageReference>,
    /// Outcome of every link check that was issued
    pub verification: VerificationReport,
}

impl GenerateResponse {
    pub fn new(
        builds: Vec<BuildInfo>,
        skipped: Vec<ImageReference>,
        verification: VerificationReport,
    ) -> Self {
        Self {
            builds,
            skipped,
            verification,
        }
    }
}
