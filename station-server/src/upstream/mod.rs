//! DB API gateway plumbing shared by the station data and facility status clients.

mod client;
mod error;

pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use error::UpstreamError;
