use crate::ApiError;

use sa_auth::AuthError;
use sa_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("Author name too long", "author").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["field"], "author");
}

#[tokio::test]
async fn test_missing_token_returns_401_with_public_message() {
    let error: ApiError = AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "missing_token");
    assert_eq!(json["error"]["message"], "Missing authentication token");
}

#[tokio::test]
async fn test_expired_token_is_indistinguishable_from_invalid() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "invalid_token");
    assert_eq!(json["error"]["message"], "Invalid authentication token");
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 20,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "rate_limited");
}

#[tokio::test]
async fn test_auth_internal_error_hides_detail() {
    let error: ApiError = AuthError::CredentialHash {
        message: "argon2 exploded with secret detail".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("secret detail")
    );
}

#[test]
fn test_duplicate_username_converts_to_conflict() {
    let error: ApiError = CoreError::DuplicateUsername {
        username: "alice".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::CONFLICT);
    assert!(matches!(error, ApiError::Conflict { ref message, .. } if message.contains("alice")));
}

#[test]
fn test_core_validation_keeps_field() {
    let error: ApiError = CoreError::Validation {
        message: "email is required".into(),
        field: "email",
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(
        error,
        ApiError::Validation { field: Some(ref f), .. } if f == "email"
    ));
}

#[tokio::test]
async fn test_store_unavailable_returns_generic_500() {
    let error: ApiError = CoreError::StoreUnavailable {
        message: "lock poisoned".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Identity store unavailable");
}
