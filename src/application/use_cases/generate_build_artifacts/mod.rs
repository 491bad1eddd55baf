use crate::application::dto::{GenerateRequest, GenerateResponse};
use crate::application::use_cases::VerifyLinksUseCase;
use crate::build_planning::domain::{BuildInfo, ImageReference, VerificationReport};
use crate::build_planning::services::{FragmentScanner, ImageResolver};
use crate::ports::outbound::{FragmentReader, LinkChecker, ProgressReporter};
use crate::shared::error::BuildHelperError;
use crate::shared::Result;

/// Verified builds and the images that had nothing to build
type ResolvedBuilds = (Vec<BuildInfo>, Vec<ImageReference>);

/// GenerateBuildArtifactsUseCase - Core use case for build plan generation
///
/// Scans the fragments, resolves every image and verifies every Dockerfile
/// link. Rendering and writing the outputs is left to the caller, which only
/// gets a response once the whole plan is known to be valid.
///
/// # Type Parameters
/// * `FR` - FragmentReader implementation
/// * `LC` - LinkChecker implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateBuildArtifactsUseCase<FR, LC, PR> {
    fragment_reader: FR,
    link_checker: LC,
    progress_reporter: PR,
    resolver: ImageResolver,
}

impl<FR, LC, PR> GenerateBuildArtifactsUseCase<FR, LC, PR>
where
    FR: FragmentReader,
    LC: LinkChecker,
    PR: ProgressReporter,
{
    /// Creates a new use case backed by the built-in resolution table
    pub fn new(fragment_reader: FR, link_checker: LC, progress_reporter: PR) -> Self {
        Self::with_resolver(
            fragment_reader,
            link_checker,
            progress_reporter,
            ImageResolver::new(),
        )
    }

    pub fn with_resolver(
        fragment_reader: FR,
        link_checker: LC,
        progress_reporter: PR,
        resolver: ImageResolver,
    ) -> Self {
        Self {
            fragment_reader,
            link_checker,
            progress_reporter,
            resolver,
        }
    }

    /// Executes the generation use case
    ///
    /// # Errors
    /// - `FragmentParseError` if a fragment is not a valid compose mapping
    /// - `ResolutionError` for the first image missing from the table
    /// - `BrokenLinks` listing every unreachable Dockerfile, after all checks ran
    pub async fn execute(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        // Step 1: Bootstrap images, then everything the fragments declare
        let images = self.collect_images(&request)?;

        // Step 2: Resolve every image; a single unknown image aborts the run
        let (builds, skipped) = self.resolve_images(&images)?;

        // Step 3: Verify every declared Dockerfile link
        let verification = self
            .verify_links(&builds, request.max_concurrent_checks)
            .await;

        // Step 4: Gate on the aggregate
        self.ensure_all_reachable(&verification)?;

        Ok(GenerateResponse::new(builds, skipped, verification))
    }

    fn collect_images(&self, request: &GenerateRequest) -> Result<Vec<ImageReference>> {
        self.progress_reporter.report(&format!(
            "📂 Scanning docker-compose fragments in: {}",
            request.fragments_dir.display()
        ));

        let fragments = self.fragment_reader.read_fragments(&request.fragments_dir)?;
        let scanned = FragmentScanner::scan(&fragments)?;

        self.progress_reporter.report(&format!(
            "✅ Found {} image reference(s) in {} fragment(s)",
            scanned.len(),
            fragments.len()
        ));

        Ok(request
            .bootstrap_images
            .iter()
            .cloned()
            .chain(scanned)
            .collect())
    }

    fn resolve_images(&self, images: &[ImageReference]) -> Result<ResolvedBuilds> {
        let mut builds = Vec::with_capacity(images.len());
        let mut skipped = Vec::new();

        for image in images {
            self.progress_reporter.report(&format!("Image: {}", image));

            let info = self.resolver.try_resolve(image)?;
            if info.has_no_dockerfile() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No Dockerfile known for image {}, skipping it.",
                    image
                ));
                skipped.push(image.clone());
                continue;
            }
            builds.push(info);
        }

        Ok((builds, skipped))
    }

    async fn verify_links(
        &self,
        builds: &[BuildInfo],
        max_concurrent_checks: usize,
    ) -> VerificationReport {
        self.progress_reporter
            .report("🔗 Verifying Dockerfile links...");

        let verifier = VerifyLinksUseCase::new(&self.link_checker, max_concurrent_checks);
        verifier
            .verify_all(builds, |done, total| {
                self.progress_reporter
                    .report_progress(done, total, Some("Checking Dockerfile links"));
            })
            .await
    }

    fn ensure_all_reachable(&self, verification: &VerificationReport) -> Result<()> {
        let broken = verification.broken();
        if broken.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✅ All {} Dockerfile link(s) are reachable",
                verification.len()
            ));
            return Ok(());
        }

        for link in &broken {
            self.progress_reporter.report_error(&format!(
                "\tBroken link detected for image {} ({})",
                link.image, link.url
            ));
        }

        Err(BuildHelperError::broken_links(broken).into())
    }
}
