use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Error,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Creation time in Unix milliseconds, strictly increasing per queue
    pub id: i64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Floating notifications, oldest first. Only the head expires; the next
/// entry starts its own lifetime once it becomes the head.
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    entries: VecDeque<Notification>,
    last_id: i64,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> i64 {
        self.push_at(Utc::now().timestamp_millis(), message, kind)
    }

    /// Same as [`push`](Self::push) with an explicit creation time
    pub fn push_at(
        &mut self,
        now_millis: i64,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> i64 {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;

        self.entries.push_back(Notification {
            id,
            message: message.into(),
            kind,
        });

        id
    }

    /// Remove the current head
    pub fn expire_head(&mut self) -> Option<Notification> {
        self.entries.pop_front()
    }

    pub fn head(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
