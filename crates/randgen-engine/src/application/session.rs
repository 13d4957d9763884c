//! View state of one generator tab.
//!
//! Every transition consumes the current state and returns the next one; the
//! rendering layer swaps in the returned value and redraws.

use randgen_core::rng::DeterministicRng;
use tracing::debug;

use super::feedback::{CopyFeedback, CopyTarget, FeedbackToken};
use super::input::GeneratorInput;
use crate::domain::generators;
use crate::domain::results::GenerationResult;

/// Text to put on the clipboard, plus the token of the reset to schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    /// Clipboard contents.
    pub text: String,
    /// Pass to [`GeneratorState::expire_feedback`] after
    /// [`COPY_FEEDBACK_DELAY`](super::feedback::COPY_FEEDBACK_DELAY).
    pub token: FeedbackToken,
}

/// Immutable view state of a generator tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    last_result: Option<GenerationResult>,
    notice: Option<String>,
    feedback: CopyFeedback,
}

impl GeneratorState {
    /// The most recent successful result.
    #[must_use]
    pub fn last_result(&self) -> Option<&GenerationResult> {
        self.last_result.as_ref()
    }

    /// A blocking notice awaiting dismissal.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The copy indicator.
    #[must_use]
    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// Validates `input` and generates. On failure the previous result is
    /// kept and the validation message becomes the notice.
    #[must_use]
    pub fn generate(self, rng: &mut dyn DeterministicRng, input: &GeneratorInput) -> Self {
        let outcome = input
            .to_request()
            .and_then(|request| generators::generate(rng, &request));

        match outcome {
            Ok(result) => Self {
                last_result: Some(result),
                notice: None,
                feedback: self.feedback.cleared(),
            },
            Err(err) => {
                debug!(error = %err, "generation rejected");
                Self {
                    notice: Some(err.to_string()),
                    ..self
                }
            }
        }
    }

    /// Dismisses the notice.
    #[must_use]
    pub fn dismiss_notice(self) -> Self {
        Self {
            notice: None,
            ..self
        }
    }

    /// Copies `target`. Returns no clipboard text when there is no result
    /// yet, or when a single value is not part of the current range result.
    #[must_use]
    pub fn copy(self, target: CopyTarget) -> (Self, Option<Clipboard>) {
        let text = match (&self.last_result, target) {
            (None, _) => None,
            (Some(result), CopyTarget::All) => Some(result.to_string()),
            (Some(GenerationResult::Range(range)), CopyTarget::Single(value))
                if range.values().contains(&value) =>
            {
                Some(value.to_string())
            }
            (Some(_), CopyTarget::Single(_)) => None,
        };
        let Some(text) = text else {
            return (self, None);
        };
        let (feedback, token) = self.feedback.copied(target);

        (Self { feedback, ..self }, Some(Clipboard { text, token }))
    }

    /// Applies a scheduled reset of the copy indicator.
    #[must_use]
    pub fn expire_feedback(self, token: FeedbackToken) -> Self {
        Self {
            feedback: self.feedback.expire(token),
            ..self
        }
    }
}
