//! Mergington - extracurricular activities record keeping
//!
//! This library provides the in-memory user roster, activity catalog,
//! and enrollment logic behind the mergington HTTP server.

pub mod catalog;
pub mod cli;
pub mod enrollment;
pub mod error;
pub mod roster;
pub mod seed;
pub mod server;

// Re-export Args for the binary
pub use cli::Args;
