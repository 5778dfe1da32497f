//! Business logic layer.
//!
//! Services sit between handlers and the store: they run the role-policy
//! check, validate input, and drive the resource lifecycle. They depend on
//! the [`crate::store::MarketStore`] trait only, so every path here is
//! exercised in tests against the in-memory backend.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod jobs;
