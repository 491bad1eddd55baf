pub mod architecture;
pub mod build_info;
pub mod image_reference;
pub mod link_check;

pub use architecture::Architecture;
pub use build_info::BuildInfo;
pub use image_reference::{ImageReference, DEFAULT_TAG};
pub use link_check::{LinkCheck, LinkCheckResult, LinkOutcome, VerificationReport};
