//! Assessment persistence: insert one, list all.

use uuid::Uuid;

use quire_core::keys;
use quire_core::models::assessment::{Assessment, NewAssessment};

use crate::documents::{load_document, save_document};
use crate::error::PersistenceError;
use crate::store::ObjectStore;

/// Persist a new assessment under a freshly assigned id and return the stored record.
///
/// Ids are UUIDv7, so key order in the store follows creation order.
pub async fn insert(
    store: &dyn ObjectStore,
    new: NewAssessment,
) -> Result<Assessment, PersistenceError> {
    let assessment = new.with_id(Uuid::now_v7());
    let key = keys::assessment(assessment.id);

    save_document(store, &key, &assessment).await?;
    tracing::debug!(id = %assessment.id, key = %key, "assessment stored");

    Ok(assessment)
}

/// Every stored assessment, in store key order.
pub async fn list_all(store: &dyn ObjectStore) -> Result<Vec<Assessment>, PersistenceError> {
    let stored = store.list_objects(keys::ASSESSMENTS_PREFIX).await?;

    let mut assessments: Vec<Assessment> = Vec::with_capacity(stored.len());
    for key in &stored {
        assessments.push(load_document(store, key).await?);
    }

    tracing::debug!(count = assessments.len(), "assessments listed");
    Ok(assessments)
}
