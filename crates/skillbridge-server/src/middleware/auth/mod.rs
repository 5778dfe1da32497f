//! Token-based authentication: claims, JWT codec, middleware, extractors.

pub mod extractor;
pub mod jwt;
pub mod layer;
pub mod types;

pub use extractor::{Auth, MaybeAuth};
pub use layer::AuthLayer;
pub use types::{AuthUser, Claims};
