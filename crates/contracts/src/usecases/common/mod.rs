//! Common types and helpers for all onboarding use cases

pub mod usecase_metadata;
pub mod validation;

// Re-exports
pub use usecase_metadata::UseCaseMetadata;
pub use validation::{optional, require, require_phone};
