//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repositories
//! - `ai` - OpenAI-compatible and mock AI providers
//! - `http` - Axum routers exposing the application handlers

pub mod ai;
pub mod http;
pub mod memory;
