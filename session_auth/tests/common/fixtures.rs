use serde::{Deserialize, Serialize};
use session_auth::{SessionConfig, SessionManager};
use std::collections::HashMap;

/// User record as the user service would hand it to the session layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl TestUser {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            email: format!("user{id}@example.com"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }
}

pub fn config_from(vars: &[(&str, &str)]) -> SessionConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SessionConfig::from_lookup(|key| map.get(key).cloned()).expect("valid test configuration")
}

pub async fn memory_manager() -> SessionManager {
    let config = config_from(&[
        ("SESSION_STORE_TYPE", "memory"),
        ("SESSION_SIGNING_KEY", "integration-test-key"),
        ("SESSION_STORE_TIMEOUT", "1s"),
    ]);
    SessionManager::from_config(&config)
        .await
        .expect("memory manager")
}

/// Redis URL for live backend tests, if one is configured.
pub fn redis_test_url() -> Option<String> {
    if dotenvy::from_filename(".env_test").is_err() {
        dotenvy::dotenv().ok();
    }
    std::env::var("SESSION_TEST_REDIS_URL")
        .ok()
        .filter(|url| !url.is_empty())
}
