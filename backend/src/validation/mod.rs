//! Validation for leave request payloads.
//!
//! Field rules live in [`rules`]; request types derive [`Validate`] and
//! reference them from their attributes.

pub mod rules;

pub use validator::Validate;
