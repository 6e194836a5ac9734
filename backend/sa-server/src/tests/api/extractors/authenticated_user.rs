use crate::AuthenticatedUser;
use crate::tests::create_test_state;

use sa_core::UserId;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn parts_with_header(value: Option<&str>) -> http::request::Parts {
    let mut builder = Request::builder();
    if let Some(value) = value {
        builder = builder.header("Authorization", value);
    }
    let (parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_subject_returned() {
    // Given
    let state = create_test_state();
    let user_id = UserId::new();
    let issued = state.token_issuer.issue(&user_id).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {}", issued.token)));

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert_eq!(result.unwrap(), AuthenticatedUser(user_id));
}

#[tokio::test]
async fn given_raw_token_without_prefix_when_extracting_then_accepted() {
    // Given
    let state = create_test_state();
    let user_id = UserId::new();
    let issued = state.token_issuer.issue(&user_id).unwrap();
    let mut parts = parts_with_header(Some(&issued.token));

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn given_no_header_when_extracting_then_unauthorized() {
    // Given
    let state = create_test_state();
    let mut parts = parts_with_header(None);

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    let err = result.unwrap_err();
    assert_eq!(err.status(), http::StatusCode::UNAUTHORIZED);
    assert!(matches!(
        err,
        crate::ApiError::Auth { kind: sa_auth::AuthErrorKind::MissingToken, .. }
    ));
}

#[tokio::test]
async fn given_garbage_token_when_extracting_then_invalid_token() {
    // Given
    let state = create_test_state();
    let mut parts = parts_with_header(Some("Bearer garbage"));

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(
        result.unwrap_err(),
        crate::ApiError::Auth { kind: sa_auth::AuthErrorKind::InvalidToken, .. }
    ));
}
