//! Transient notices (toasts)
//!
//! Short messages that expire on their own after a fixed time to live.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default notice lifetime
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Most notices kept at once
pub const MAX_NOTICES: usize = 4;

/// Notice identifier, unique per board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

/// Severity of a notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Something worked
    Success,
    /// Something failed
    Error,
    /// Neutral information
    Info,
}

/// A posted notice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Identifier for dismissal
    pub id: NoticeId,
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub text: String,
    /// When it was posted
    pub posted_at: Instant,
}

/// Bounded, self-expiring list of notices
#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: VecDeque<Notice>,
    next_id: u64,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    /// Create an empty board whose notices live for `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: VecDeque::with_capacity(MAX_NOTICES),
            next_id: 0,
        }
    }

    /// Post a notice, evicting the oldest when full
    pub fn post(&mut self, level: NoticeLevel, text: impl Into<String>, now: Instant) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            id,
            level,
            text: text.into(),
            posted_at: now,
        });
        id
    }

    /// Remove a notice early. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drop every notice older than the TTL
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.notices
            .retain(|n| now.saturating_duration_since(n.posted_at) < ttl);
    }

    /// Live notices, oldest first
    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Newest live notice
    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Number of live notices
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// No live notices?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
