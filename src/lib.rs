//! Orica - Pros/cons decision advisor
//!
//! Records two options with rated pros and cons, scores them
//! deterministically and explains the recommendation. An optional language
//! model suggests starter pros/cons.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
