mod api;

use crate::AppState;

use sa_config::{AuthConfig, Config};
use sa_core::InMemoryIdentityStore;

use std::sync::Arc;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-at-least-32-characters";

pub(crate) fn create_test_state() -> AppState {
    let config = Config {
        auth: AuthConfig {
            jwt_secret: Some(TEST_SECRET.to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    AppState::from_config(&config, Arc::new(InMemoryIdentityStore::new()))
        .expect("test state should build")
}
