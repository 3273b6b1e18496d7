//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter; `app_router` merges them.

pub mod analysis;
pub mod decisions;
mod error;
mod router;
mod state;
pub mod suggestions;

pub use error::{ApiError, ErrorResponse, ANALYSIS_FAILURE_MESSAGE};
pub use router::{app_router, RouterSettings};
pub use state::AppState;
