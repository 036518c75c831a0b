use uuid::Uuid;

use super::time::now_millis;

/// A client session. Every event created while the session is current
/// carries its id and start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub start_timestamp: i64,
}

impl Session {
    pub fn new(id: impl Into<String>, start_timestamp: i64) -> Self {
        Self {
            id: id.into(),
            start_timestamp,
        }
    }

    /// Start a fresh session now.
    pub fn start() -> Self {
        Self::new(Uuid::new_v4().simple().to_string(), now_millis())
    }
}
