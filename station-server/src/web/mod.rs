//! Web layer for the station browser.
//!
//! HTML pages for the station list and station details, plus JSON
//! endpoints over the same data.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
