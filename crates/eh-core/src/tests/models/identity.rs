use crate::{CoreError, Identity, Role};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, none, some};

#[test]
fn given_guest_role_when_new_then_rejected() {
    let result = Identity::new("1", "19/ENG02/001", "a@b.com", Role::Guest);

    assert!(matches!(result, Err(CoreError::GuestIdentity { .. })));
}

#[test]
fn given_empty_id_when_new_then_validation_error() {
    let result = Identity::new("", "19/ENG02/001", "a@b.com", Role::Student);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_generate_when_called_twice_then_ids_differ() {
    let first = Identity::generate("m", "a@b.com", Role::Student).unwrap();
    let second = Identity::generate("m", "a@b.com", Role::Student).unwrap();

    assert_ne!(first.id(), second.id());
}

#[test]
fn given_identity_when_serialized_then_uses_camel_case_and_skips_absent_fields() {
    let identity = Identity::new("42", "19/ENG02/001", "a@b.com", Role::Student).unwrap();

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, contains_substring("\"matricNo\":\"19/ENG02/001\""));
    assert_that!(json, contains_substring("\"role\":\"STUDENT\""));
    assert!(!json.contains("avatar"));
    assert!(!json.contains("name"));
}

#[test]
fn given_full_identity_when_serialize_roundtrip_then_preserves_all_fields() {
    let original = Identity::new("42", "19/ENG02/001", "a@b.com", Role::Admin)
        .unwrap()
        .with_name("Ada")
        .with_avatar("https://cdn.example/ada.png");

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
    assert_that!(restored.name(), some(eq("Ada")));
}

#[test]
fn given_record_without_optional_fields_when_deserialize_then_defaults_to_none() {
    let json = r#"{"id":"7","matricNo":"m","email":"a@b.com","role":"STUDENT"}"#;

    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_that!(identity.name(), none());
    assert_that!(identity.avatar(), none());
}

#[test]
fn given_guest_record_when_deserialize_then_fails() {
    let json = r#"{"id":"7","matricNo":"m","email":"a@b.com","role":"GUEST"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}
