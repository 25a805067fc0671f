//! Announcement - admin broadcast shown on every dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::sync::atomic::{AtomicI64, Ordering};

/// Author recorded on announcements posted from the admin console
pub const ADMIN_AUTHOR: &str = "Admin Office";

static LAST_ID: AtomicI64 = AtomicI64::new(0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Millisecond creation timestamp, bumped past the previous id when two
    /// announcements land in the same millisecond
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub important: bool,
}

impl Announcement {
    /// Create an important announcement attributed to the admin office
    pub fn from_admin(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: next_id(now.timestamp_millis()),
            title: title.into(),
            content: content.into(),
            author: ADMIN_AUTHOR.to_string(),
            date: now,
            important: true,
        }
    }
}

/// Strictly increasing across the process
fn next_id(now_millis: i64) -> i64 {
    let previous = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_millis.max(last + 1))
        })
        .unwrap_or_else(|last| last);
    now_millis.max(previous + 1)
}
