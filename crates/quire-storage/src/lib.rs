//! quire-storage
//!
//! Document persistence. An [`store::ObjectStore`] seam with an S3 backend
//! and an in-memory backend, plus the assessment gateway built on top of it.

pub mod assessments;
pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod store;
