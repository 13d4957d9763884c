//! "Copied" indicator state.
//!
//! A copy action shows an indicator that a delayed task clears after
//! [`COPY_FEEDBACK_DELAY`]. Every copy issues a new [`FeedbackToken`] and
//! invalidates the previous one, so only the most recently scheduled reset
//! has any effect. No cancellation is needed: stale resets are ignored.

use std::time::Duration;

/// How long the indicator stays visible after a copy.
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_secs(2);

/// What was copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The whole result.
    All,
    /// One value of a range result.
    Single(i64),
}

/// Identifies the reset scheduled by one copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackToken(u64);

/// Immutable indicator state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    shown: Option<CopyTarget>,
    current: u64,
}

impl CopyFeedback {
    /// The target whose indicator is visible, if any.
    #[must_use]
    pub fn shown(&self) -> Option<CopyTarget> {
        self.shown
    }

    /// Records a copy of `target`. The returned token is the only one whose
    /// [`expire`](Self::expire) will clear the indicator.
    #[must_use]
    pub fn copied(self, target: CopyTarget) -> (Self, FeedbackToken) {
        let current = self.current.wrapping_add(1);
        (
            Self {
                shown: Some(target),
                current,
            },
            FeedbackToken(current),
        )
    }

    /// Clears the indicator if `token` is still current; otherwise returns
    /// the state unchanged.
    #[must_use]
    pub fn expire(self, token: FeedbackToken) -> Self {
        if token.0 == self.current {
            Self {
                shown: None,
                ..self
            }
        } else {
            self
        }
    }

    /// Hides the indicator immediately, as a new generation does.
    #[must_use]
    pub fn cleared(self) -> Self {
        Self {
            shown: None,
            ..self
        }
    }
}
