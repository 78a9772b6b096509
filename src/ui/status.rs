use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Short-lived message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>, ttl: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
            expires_at: now + ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
