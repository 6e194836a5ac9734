use crate::{CoreError, NewUser};

#[test]
fn test_new_user_valid() {
    let user = NewUser::new("alice", "a@x.com", "$argon2id$hash").unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
}

#[test]
fn test_new_user_rejects_blank_username() {
    let result = NewUser::new("   ", "a@x.com", "$argon2id$hash");

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "username",
            ..
        })
    ));
}

#[test]
fn test_new_user_rejects_empty_email() {
    let result = NewUser::new("alice", "", "$argon2id$hash");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn test_new_user_rejects_empty_credential() {
    let result = NewUser::new("alice", "a@x.com", "");

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "password",
            ..
        })
    ));
}

#[test]
fn test_new_user_debug_redacts_credential() {
    let user = NewUser::new("alice", "a@x.com", "$argon2id$secret-hash").unwrap();

    let debug = format!("{:?}", user);

    assert!(!debug.contains("secret-hash"));
    assert!(debug.contains("<redacted>"));
}
