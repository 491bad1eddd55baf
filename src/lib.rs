//! dockerfile-build-helper - build script and status table generator for docker-compose fragments
//!
//! This library scans docker-compose fragments for the images they use, resolves each
//! image to the git repository and Dockerfiles it is built from, verifies that every
//! Dockerfile link is reachable, and renders a `build-all.sh` script plus an optional
//! Markdown status table. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_planning`): Image references, build recipes and link checks
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dockerfile_build_helper::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let fragment_reader = FileSystemReader::new();
//! let link_checker = CachingLinkChecker::new(HttpLinkChecker::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     GenerateBuildArtifactsUseCase::new(fragment_reader, link_checker, progress_reporter);
//!
//! // Execute
//! let request = GenerateRequest::new(PathBuf::from("docker-compose-generator/docker-fragments"));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let script = BuildScriptFormatter::new().format(&response.builds)?;
//! println!("{}", script);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_planning;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{BuildScriptFormatter, StatusTableFormatter};
    pub use crate::adapters::outbound::network::{CachingLinkChecker, HttpLinkChecker};
    pub use crate::application::dto::{GenerateRequest, GenerateResponse};
    pub use crate::application::read_models::{StatusTableReadModel, StatusTableReadModelBuilder};
    pub use crate::application::use_cases::{GenerateBuildArtifactsUseCase, VerifyLinksUseCase};
    pub use crate::build_planning::domain::{
        Architecture, BuildInfo, ImageReference, LinkCheck, LinkCheckResult, LinkOutcome,
        VerificationReport,
    };
    pub use crate::build_planning::policies::TagTransform;
    pub use crate::build_planning::services::{FragmentScanner, ImageResolver, RecipeTable};
    pub use crate::ports::outbound::{
        DocumentFormatter, DocumentReader, FragmentDocument, FragmentReader, GeneratedArtifact,
        LinkChecker, OutputPresenter, ProgressReporter, ScriptFormatter,
    };
    pub use crate::shared::error::BuildHelperError;
    pub use crate::shared::Result;
}
