//! Cross-cutting request concerns: authentication and role authorization.

pub mod auth;
pub mod authz;
