//! quire-core
//!
//! Pure domain types and object-key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the Quire system.

pub mod cast;
pub mod keys;
pub mod models;
