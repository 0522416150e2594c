//! parley-core
//!
//! Pure domain types for the chat relay: conversation messages, the
//! generation service payloads, and caller identity claims.
//! No HTTP or AWS dependency — this is the shared vocabulary of Parley.

pub mod arn;
pub mod models;
