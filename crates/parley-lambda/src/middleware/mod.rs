pub mod audit;
pub mod headers;
