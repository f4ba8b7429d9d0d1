//! Object key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of documents in the Quire bucket.

use uuid::Uuid;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}
