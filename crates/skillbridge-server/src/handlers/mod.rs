//! HTTP handlers.
//!
//! Thin adapters: extract, call into `services`, wrap the result in the
//! response envelope.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod jobs;
