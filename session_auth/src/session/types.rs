use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State kept for an authenticated session: when it began and who owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState<U> {
    pub start: DateTime<Utc>,
    pub user: U,
}

impl<U> SessionState<U> {
    pub fn new(user: U) -> Self {
        Self {
            start: Utc::now(),
            user,
        }
    }
}
