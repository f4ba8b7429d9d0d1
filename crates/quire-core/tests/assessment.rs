use pretty_assertions::assert_eq;
use serde_json::{json, Number};
use uuid::Uuid;

use quire_core::keys;
use quire_core::models::assessment::{Assessment, NewAssessment, Settings};

#[test]
fn full_payload_round_trips_with_camel_case_names() {
    let body = json!({
        "teacherId": "64b7f0c2a1b2c3d4e5f60718",
        "templateId": "64b7f0c2a1b2c3d4e5f60719",
        "content": {
            "questions": [{ "text": "2 + 2?", "points": 1 }],
            "answers": ["4"],
            "instructions": "Show your work."
        },
        "settings": {
            "mode": "exam",
            "copies": 3,
            "randomization": { "shuffleQuestions": true, "seed": 42 }
        }
    });

    let new: NewAssessment = serde_json::from_value(body.clone()).unwrap();
    let id = Uuid::now_v7();
    let stored = serde_json::to_value(new.with_id(id)).unwrap();

    let mut expected = body;
    expected["id"] = json!(id);
    assert_eq!(stored, expected);
}

#[test]
fn empty_payload_is_accepted() {
    let new: NewAssessment = serde_json::from_value(json!({})).unwrap();
    let id = Uuid::now_v7();
    let stored = serde_json::to_value(new.with_id(id)).unwrap();

    assert_eq!(
        stored,
        json!({ "id": id, "content": { "questions": [], "answers": [] } })
    );
}

#[test]
fn unknown_fields_are_dropped() {
    let new: NewAssessment =
        serde_json::from_value(json!({ "teacherId": "t1", "grade": "A+" })).unwrap();

    assert_eq!(new.teacher_id.as_deref(), Some("t1"));
    assert!(!serde_json::to_string(&new).unwrap().contains("grade"));
}

#[test]
fn randomization_keeps_submission_order() {
    let raw = r#"{"settings":{"randomization":{"zeta":1,"alpha":2,"mid":3}}}"#;
    let new: NewAssessment = serde_json::from_str(raw).unwrap();

    let keys: Vec<&str> = new
        .settings
        .as_ref()
        .and_then(|s| s.randomization.as_ref())
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

fn settings_of(body: serde_json::Value) -> Settings {
    let new: NewAssessment = serde_json::from_value(body).unwrap();
    new.settings.unwrap_or_default()
}

#[test]
fn non_numeric_copies_is_rejected() {
    let result = serde_json::from_value::<NewAssessment>(json!({
        "settings": { "copies": "many" }
    }));
    assert!(result.is_err());

    let result = serde_json::from_value::<NewAssessment>(json!({
        "settings": { "copies": [1] }
    }));
    assert!(result.is_err());
}

#[test]
fn copies_accepts_any_number() {
    let fractional = settings_of(json!({ "settings": { "copies": 2.5 } }));
    assert_eq!(fractional.copies, Number::from_f64(2.5));

    let negative = settings_of(json!({ "settings": { "copies": -1 } }));
    assert_eq!(negative.copies, Some(Number::from(-1)));
}

#[test]
fn copies_casts_numeric_strings_and_booleans() {
    let from_string = settings_of(json!({ "settings": { "copies": " 30 " } }));
    assert_eq!(from_string.copies, Some(Number::from(30)));

    let from_float_string = settings_of(json!({ "settings": { "copies": "1.5" } }));
    assert_eq!(from_float_string.copies, Number::from_f64(1.5));

    let from_bool = settings_of(json!({ "settings": { "copies": true } }));
    assert_eq!(from_bool.copies, Some(Number::from(1)));

    let blank = settings_of(json!({ "settings": { "copies": "" } }));
    assert_eq!(blank.copies, None);
}

#[test]
fn string_fields_stringify_scalars() {
    let settings = settings_of(json!({ "settings": { "mode": 5 } }));
    assert_eq!(settings.mode.as_deref(), Some("5"));

    let settings = settings_of(json!({ "settings": { "mode": false } }));
    assert_eq!(settings.mode.as_deref(), Some("false"));

    let new: NewAssessment =
        serde_json::from_value(json!({ "content": { "instructions": 1.5 } })).unwrap();
    assert_eq!(
        new.content.and_then(|c| c.instructions).as_deref(),
        Some("1.5")
    );
}

#[test]
fn string_fields_reject_structured_values() {
    let result = serde_json::from_value::<NewAssessment>(json!({
        "settings": { "mode": { "kind": "exam" } }
    }));
    assert!(result.is_err());
}

#[test]
fn null_scalars_are_absent() {
    let settings = settings_of(json!({ "settings": { "mode": null, "copies": null } }));
    assert_eq!(settings, Settings::default());
}

#[test]
fn stored_document_without_content_decodes() {
    let id = Uuid::now_v7();
    let assessment: Assessment = serde_json::from_value(json!({ "id": id })).unwrap();

    assert_eq!(assessment.id, id);
    assert!(assessment.content.questions.is_empty());
    assert!(assessment.settings.is_none());
}

#[test]
fn assessment_keys_live_under_the_prefix() {
    let id = Uuid::nil();
    let key = keys::assessment(id);

    assert!(key.starts_with(keys::ASSESSMENTS_PREFIX));
    assert_eq!(key, "assessments/00000000-0000-0000-0000-000000000000.json");
}
