pub mod authorization_gate;
pub mod claims;
pub mod client_rate_limiter;
pub mod credential_hasher;
pub mod credential_verifier;
pub mod error;
pub mod rate_limit_config;
pub mod token_issuer;
pub mod token_verifier;

pub use authorization_gate::{BEARER_PREFIX, authorize, extract_token};
pub use claims::Claims;
pub use client_rate_limiter::ClientRateLimiter;
pub use credential_hasher::{hash_secret, verify_secret};
pub use credential_verifier::CredentialVerifier;
pub use error::{AuthError, AuthErrorKind, Result};
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use token_verifier::TokenVerifier;

#[cfg(test)]
mod tests;
