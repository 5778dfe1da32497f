//! Standard API responses.

mod types;

pub use types::{ApiResponse, ErrorInfo, ResponseMeta};
