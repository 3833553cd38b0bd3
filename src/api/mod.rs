//! API-Football access: HTTP client, payload schema and flattening.

pub mod flatten;
pub mod http;
pub mod types;

pub use flatten::flatten_statistics;
pub use http::{ApiClient, Endpoint};
