//! parley-generate
//!
//! Client for the downstream text-generation service (`POST /generate`).

pub mod client;
pub mod error;
