use crate::{CoreError, UserId};

use std::str::FromStr;

#[test]
fn test_user_id_new_is_unique() {
    let a = UserId::new();
    let b = UserId::new();

    assert_ne!(a, b);
}

#[test]
fn test_user_id_display_parse_roundtrip() {
    let id = UserId::new();

    let parsed = UserId::parse(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_user_id_from_str_matches_parse() {
    let id = UserId::new();

    let parsed = UserId::from_str(&id.to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_user_id_parse_rejects_time_based_id() {
    let result = UserId::parse("user_1700000000");

    match result {
        Err(CoreError::InvalidUserId { value, .. }) => assert_eq!(value, "user_1700000000"),
        other => panic!("Expected InvalidUserId, got {:?}", other),
    }
}
