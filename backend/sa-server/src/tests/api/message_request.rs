use crate::MessageRequest;

use sa_config::ApiConfig;

fn message(content: &str, author: &str) -> MessageRequest {
    MessageRequest {
        content: content.to_string(),
        author: author.to_string(),
    }
}

#[test]
fn test_valid_message_passes() {
    assert!(message("hello", "bob").validate(&ApiConfig::default()).is_ok());
}

#[test]
fn test_boundary_lengths_pass() {
    let config = ApiConfig::default();
    let content = "a".repeat(config.max_message_length);
    let author = "b".repeat(config.max_author_length);

    assert!(message(&content, &author).validate(&config).is_ok());
}

#[test]
fn test_empty_content_rejected_on_content_field() {
    let err = message("", "bob").validate(&ApiConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        crate::ApiError::Validation { field: Some(ref f), ref message, .. }
            if f == "content" && message == "Message content is required"
    ));
}

#[test]
fn test_empty_author_rejected_on_author_field() {
    let err = message("hi", "").validate(&ApiConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        crate::ApiError::Validation { field: Some(ref f), .. } if f == "author"
    ));
}

#[test]
fn test_overlong_content_rejected() {
    let content = "a".repeat(101);
    let err = message(&content, "bob").validate(&ApiConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        crate::ApiError::Validation { ref message, .. } if message == "Message content too long"
    ));
}

#[test]
fn test_lengths_count_characters_not_bytes() {
    // 100 two-byte characters
    let content = "é".repeat(100);
    assert!(message(&content, "bob").validate(&ApiConfig::default()).is_ok());
}

#[test]
fn test_configured_limits_apply() {
    let config = ApiConfig {
        max_author_length: 3,
        ..Default::default()
    };
    assert!(message("hi", "bobby").validate(&config).is_err());
}
