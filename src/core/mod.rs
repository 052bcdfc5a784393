//! Pure core of the waitlist interaction flow.
//!
//! This module contains the side-effect-free half of the crate:
//! - State definitions and presentation projections
//! - Draft/form types with required-field validation
//! - Input events and the effects vocabulary
//! - The transition function [`step`]
//! - Immutable history tracking
//!
//! All logic in this module is pure (no I/O, no clock), following
//! the "pure core, imperative shell" philosophy.

mod draft;
mod effect;
mod event;
mod history;
mod state;
mod transition;

pub use draft::{DraftError, FormValues, Role, SignupDraft, TeamSize};
pub use effect::Effect;
pub use event::{CloseReason, Event, Source};
pub use history::{InteractionHistory, TransitionRecord};
pub use state::{InteractionState, ModalState, SubmissionState};
pub use transition::{step, IgnoreReason, Step};
