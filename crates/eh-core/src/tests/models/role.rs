use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::Student.as_str(), "STUDENT");
    assert_eq!(Role::Guest.as_str(), "GUEST");
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("STUDENT").unwrap(), Role::Student);
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("Teacher").is_err());
}

#[test]
fn test_role_default_is_guest() {
    assert_eq!(Role::default(), Role::Guest);
}

#[test]
fn test_role_serializes_to_wire_form() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"STUDENT\"");
}
