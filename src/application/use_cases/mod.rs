/// Use cases module containing application business logic orchestration
mod generate_build_artifacts;
mod verify_links;

pub use generate_build_artifacts::GenerateBuildArtifactsUseCase;
pub use verify_links::VerifyLinksUseCase;
