//! Storage layer
//!
//! All platform state lives in one in-memory store; there is no
//! persistence tier behind it. State dies with the process.

mod seed;
pub mod store;

pub use store::Store;
