use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use ts_rs::TS;
use uuid::Uuid;

use crate::cast;

/// A teacher-authored test or quiz, as persisted in the document store.
///
/// Nothing beyond `id` is required. The teacher and template references are
/// opaque and never resolved against anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub settings: Option<Settings>,
}

/// Questions and answers are free-form; their element shape is up to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Content {
    #[serde(default)]
    pub questions: Vec<Value>,
    #[serde(default)]
    pub answers: Vec<Value>,
    #[serde(
        default,
        deserialize_with = "cast::string",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "cast::string",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub mode: Option<String>,
    /// Any JSON number, or a numeric string. Not range-checked.
    #[serde(
        default,
        deserialize_with = "cast::number",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional, as = "Option<f64>")]
    pub copies: Option<Number>,
    /// Arbitrary key/value options. Key order is preserved as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub randomization: Option<Map<String, Value>>,
}

/// Body of a create request: any subset of the caller-supplied fields.
///
/// Fields the schema does not know about are dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub settings: Option<Settings>,
}

impl NewAssessment {
    /// Attach a store-assigned id, producing the record that gets persisted.
    pub fn with_id(self, id: Uuid) -> Assessment {
        Assessment {
            id,
            teacher_id: self.teacher_id,
            template_id: self.template_id,
            content: self.content.unwrap_or_default(),
            settings: self.settings,
        }
    }
}
