//! Decision HTTP adapter - decisions, their statements and mindset answers.

pub mod dto;
pub mod handlers;
mod routes;

pub use routes::decision_routes;
