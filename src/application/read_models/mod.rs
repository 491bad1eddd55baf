//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving a denormalized representation of the
//! verified builds, ready for rendering.

pub mod status_table_read_model;
pub mod status_table_read_model_builder;

pub use status_table_read_model::{ImageRowView, StatusTableReadModel};
pub use status_table_read_model_builder::StatusTableReadModelBuilder;
