/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the build planning services and coordinates with
/// infrastructure through the outbound ports.
pub mod dto;
pub mod read_models;
pub mod use_cases;
