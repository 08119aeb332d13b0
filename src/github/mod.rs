pub mod activity;
pub mod client;
pub mod models;

pub use activity::{ActivityOutcome, EventSource, LookupError, fetch_latest};
pub use client::GithubClient;
pub use models::*;
