//! Interaction state for the waitlist modal.
//!
//! Modal visibility and submission status are composed into a single
//! [`InteractionState`] enum, so an impossible combination (a submitted
//! form behind a closed modal, a confirmation without a draft) cannot be
//! constructed. The presentation layer reads the two classic projections
//! via [`InteractionState::modal_state`] and
//! [`InteractionState::submission_state`].

use super::draft::SignupDraft;
use serde::{Deserialize, Serialize};

/// Position of the signup flow.
///
/// The draft captured at submission time is frozen inside
/// `OpenSubmitted`, which is what the confirmation message renders from;
/// later edits to the form entry cannot reach it.
///
/// # Example
///
/// ```rust
/// use ovel_waitlist::core::{InteractionState, ModalState, SubmissionState};
///
/// let state = InteractionState::Closed;
/// assert_eq!(state.modal_state(), ModalState::Closed);
/// assert_eq!(state.submission_state(), SubmissionState::Idle);
///
/// let state = InteractionState::OpenIdle;
/// assert_eq!(state.modal_state(), ModalState::Open);
/// assert!(state.submitted_draft().is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InteractionState {
    /// Modal hidden; nothing in flight.
    Closed,
    /// Modal visible, form awaiting input.
    OpenIdle,
    /// Modal visible, showing the confirmation for `draft`.
    OpenSubmitted { draft: SignupDraft },
}

/// Modal visibility, as the presentation layer consumes it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ModalState {
    Closed,
    Open,
}

/// Submission status, as the presentation layer consumes it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SubmissionState {
    Idle,
    Submitted,
}

impl InteractionState {
    /// State name for logging and history records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::OpenIdle => "OpenIdle",
            Self::OpenSubmitted { .. } => "OpenSubmitted",
        }
    }

    pub fn modal_state(&self) -> ModalState {
        match self {
            Self::Closed => ModalState::Closed,
            Self::OpenIdle | Self::OpenSubmitted { .. } => ModalState::Open,
        }
    }

    pub fn submission_state(&self) -> SubmissionState {
        match self {
            Self::OpenSubmitted { .. } => SubmissionState::Submitted,
            Self::Closed | Self::OpenIdle => SubmissionState::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal_state() == ModalState::Open
    }

    pub fn is_submitted(&self) -> bool {
        self.submission_state() == SubmissionState::Submitted
    }

    /// The draft captured at submission time, if any.
    pub fn submitted_draft(&self) -> Option<&SignupDraft> {
        match self {
            Self::OpenSubmitted { draft } => Some(draft),
            _ => None,
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Closed
    }
}
