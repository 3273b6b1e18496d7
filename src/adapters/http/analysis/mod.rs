//! Analysis HTTP adapter - the recommendation endpoint.

pub mod dto;
mod handlers;
mod routes;

pub use routes::analysis_routes;
