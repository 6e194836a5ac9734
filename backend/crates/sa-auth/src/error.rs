use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Missing authentication token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token issuance failed: {source} {location}")]
    Issuance {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid auth configuration: {message} {location}")]
    InvalidConfig {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential hashing failed: {message} {location}")]
    CredentialHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity store error: {source} {location}")]
    Store {
        #[source]
        source: sa_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

/// Client-visible classification of an [`AuthError`].
///
/// Several internal variants collapse into one kind so clients cannot tell
/// a tampered token from an expired one, or an unknown user from a wrong
/// secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    IssuanceFailure,
    RateLimited,
    Internal,
}

impl AuthErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
            Self::IssuanceFailure => "issuance_failure",
            Self::RateLimited => "rate_limited",
            Self::Internal => "internal_error",
        }
    }

    /// Generic message safe to return to clients
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::MissingToken => "Missing authentication token",
            Self::InvalidToken => "Invalid authentication token",
            Self::IssuanceFailure => "Could not generate token",
            Self::RateLimited => "Too many requests",
            Self::Internal => "Internal authentication error",
        }
    }
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidCredentials { .. } => AuthErrorKind::InvalidCredentials,
            Self::MissingToken { .. } => AuthErrorKind::MissingToken,
            Self::InvalidToken { .. }
            | Self::TokenExpired { .. }
            | Self::JwtDecode { .. }
            | Self::InvalidClaim { .. } => AuthErrorKind::InvalidToken,
            Self::Issuance { .. } => AuthErrorKind::IssuanceFailure,
            Self::RateLimitExceeded { .. } => AuthErrorKind::RateLimited,
            Self::InvalidConfig { .. } | Self::CredentialHash { .. } | Self::Store { .. } => {
                AuthErrorKind::Internal
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        self.kind().code()
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
