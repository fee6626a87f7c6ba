//! Transient notifications. A notification stays visible for its `life` and is
//! then dismissed, either by the renderer's timer or by the user.

use std::time::{Duration, Instant};

/// How long an outcome notification stays on screen.
pub const NOTIFICATION_LIFE: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub detail: String,
    pub life: Duration,
    pub shown_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(detail: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            detail: detail.into(),
            life: NOTIFICATION_LIFE,
            shown_at,
        }
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.life
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}
