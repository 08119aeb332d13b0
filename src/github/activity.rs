use std::future::Future;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use super::models::{ActivityRecord, RawEvent};
use crate::util::time::relative_time;

pub const FALLBACK_REPOSITORY: &str = "netbird-traefik";
pub const FALLBACK_MESSAGE: &str = "pushed to main";
pub const FALLBACK_RELATIVE_TIME: &str = "15d ago";
pub const FALLBACK_URL: &str = "https://github.com/iamnotsomting";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("GitHub events request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GitHub events endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("Failed to decode GitHub events: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No push event among the {0} most recent events")]
    NoPushEvent(usize),
    #[error("Push event to {0} has no commits")]
    MissingCommit(String),
}

/// Anything that can list a user's recent public events, newest first.
pub trait EventSource {
    fn public_events(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<RawEvent>, LookupError>> + Send;
}

/// Result of a lookup. The record is always complete; `Fallback` says it is
/// the canned one and why.
#[derive(Debug)]
pub enum ActivityOutcome {
    Live(ActivityRecord),
    Fallback {
        record: ActivityRecord,
        reason: LookupError,
    },
}

impl ActivityOutcome {
    pub fn record(&self) -> &ActivityRecord {
        match self {
            ActivityOutcome::Live(record) => record,
            ActivityOutcome::Fallback { record, .. } => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ActivityOutcome::Fallback { .. })
    }
}

pub fn fallback_record() -> ActivityRecord {
    ActivityRecord {
        repository_name: FALLBACK_REPOSITORY.to_string(),
        message: FALLBACK_MESSAGE.to_string(),
        relative_time: FALLBACK_RELATIVE_TIME.to_string(),
        url: FALLBACK_URL.to_string(),
    }
}

/// Build the card record from the first push event in `events`.
pub fn latest_push(events: &[RawEvent], now: &DateTime<Utc>) -> Result<ActivityRecord, LookupError> {
    let push = events
        .iter()
        .find(|e| e.is_push())
        .ok_or(LookupError::NoPushEvent(events.len()))?;

    let commit = push
        .payload
        .commits
        .first()
        .ok_or_else(|| LookupError::MissingCommit(push.repo.name.clone()))?;

    let full_name = &push.repo.name;
    let repository_name = full_name.split('/').nth(1).unwrap_or(full_name.as_str());

    Ok(ActivityRecord {
        repository_name: repository_name.to_string(),
        message: commit.message.clone(),
        relative_time: relative_time(&push.created_at, now),
        url: format!("https://github.com/{full_name}"),
    })
}

/// Look up the most recent push by `username`. Never fails: every error
/// path is logged and resolved to the fallback record.
pub async fn fetch_latest<S: EventSource>(
    source: &S,
    username: &str,
    now: DateTime<Utc>,
) -> ActivityOutcome {
    let result = match source.public_events(username).await {
        Ok(events) => latest_push(&events, &now),
        Err(e) => Err(e),
    };

    match result {
        Ok(record) => {
            debug!(
                user = username,
                repo = %record.repository_name,
                "Resolved latest push"
            );
            ActivityOutcome::Live(record)
        }
        Err(reason) => {
            warn!(user = username, error = %reason, "Using fallback activity");
            ActivityOutcome::Fallback {
                record: fallback_record(),
                reason,
            }
        }
    }
}
