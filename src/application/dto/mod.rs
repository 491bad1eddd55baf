/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generate_request;
mod generate_response;

pub use generate_request::{GenerateRequest, BOOTSTRAP_IMAGES, DEFAULT_MAX_CONCURRENT_CHECKS};
pub use generate_response::GenerateResponse;
