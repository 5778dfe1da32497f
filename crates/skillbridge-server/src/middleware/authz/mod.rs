//! Role-based authorization policy.

mod types;

pub use types::{Action, Permission, PolicyRegistry, Resource, RolePolicy};
