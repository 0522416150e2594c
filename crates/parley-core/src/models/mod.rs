pub mod chat;
pub mod claims;
pub mod generation;
