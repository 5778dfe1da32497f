//! Server configuration.
//!
//! Configuration is assembled from `SKILLBRIDGE_`-prefixed environment
//! variables with `__` separating nested sections (for example
//! `SKILLBRIDGE_SERVER__PORT=9090` or `SKILLBRIDGE_AUTH__JWT_SECRET=...`),
//! falling back to serde defaults for anything unset.

mod types;

pub use types::{AuthConfig, CorsConfig, LoggingConfig, ServerBindConfig, ServerConfig};
