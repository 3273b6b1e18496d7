//! Suggestion HTTP adapter - AI-assisted pros/cons.

pub mod dto;
mod handlers;
mod routes;

pub use routes::suggestion_routes;
