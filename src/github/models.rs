use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of a user's public event feed. Only the fields the activity
/// card needs are decoded; everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub repo: EventRepo,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    /// `owner/name`
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
}

impl RawEvent {
    pub fn is_push(&self) -> bool {
        self.kind == "PushEvent"
    }
}

/// What the "last commit" card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub repository_name: String,
    pub message: String,
    pub relative_time: String,
    pub url: String,
}
