//! The pure transition function.
//!
//! [`step`] maps the current state and an incoming event to a [`Step`]:
//! either a transition with its ordered effects list, or an ignore with a
//! named reason. It performs no I/O, reads no clock, and is total over
//! every (state, event) pair, so the whole interaction contract is
//! checkable without a UI or a collector.

use super::draft::DraftError;
use super::effect::Effect;
use super::event::Event;
use super::state::InteractionState;
use crate::analytics::event::{
    identify_traits, open_properties, signup_properties, OPEN_WAITLIST_MODAL, WAITLIST_SIGNUP,
};

/// Outcome of feeding one event through the transition function.
#[derive(Clone, PartialEq, Debug)]
pub enum Step {
    /// The event moved the flow to `next`; the shell must run `effects`
    /// in order.
    Transition {
        next: InteractionState,
        effects: Vec<Effect>,
    },
    /// The event does not apply in the current state.
    Ignore { reason: IgnoreReason },
}

/// Why an event was ignored.
#[derive(Clone, PartialEq, Debug)]
pub enum IgnoreReason {
    /// An open trigger fired while the modal was already visible.
    AlreadyOpen,
    /// Close or submit arrived while the modal was hidden.
    NotOpen,
    /// Submit arrived after a successful submission (the control is
    /// logically disabled once submitted).
    AlreadySubmitted,
    /// A required field was missing or unparseable.
    IncompleteDraft(DraftError),
    /// The auto-dismiss timer elapsed outside the confirmation window.
    NotSubmitted,
}

/// Apply one event to the current state.
///
/// Transitions into the open state always emit exactly one
/// `open_waitlist_modal` capture carrying the source tag; there is no
/// silent path into the modal. A complete submission emits exactly one
/// `waitlist_signup` capture, one identify keyed by the email, and arms
/// the auto-dismiss timer. Every open and close also disarms any stale
/// timer, so at most one auto-close can ever be pending.
///
/// # Example
///
/// ```rust
/// use ovel_waitlist::core::{step, Event, InteractionState, Source, Step};
///
/// let event = Event::Open { source: Source::HeroCta };
/// match step(&InteractionState::Closed, &event) {
///     Step::Transition { next, effects } => {
///         assert_eq!(next, InteractionState::OpenIdle);
///         assert_eq!(effects.iter().filter(|e| e.is_analytics()).count(), 1);
///     }
///     Step::Ignore { .. } => unreachable!(),
/// }
/// ```
pub fn step(state: &InteractionState, event: &Event) -> Step {
    match (state, event) {
        (InteractionState::Closed, Event::Open { source }) => Step::Transition {
            next: InteractionState::OpenIdle,
            effects: vec![
                Effect::CancelAutoClose,
                Effect::Capture {
                    event: OPEN_WAITLIST_MODAL,
                    properties: open_properties(*source),
                },
            ],
        },

        (InteractionState::OpenIdle | InteractionState::OpenSubmitted { .. }, Event::Open { .. }) => {
            Step::Ignore {
                reason: IgnoreReason::AlreadyOpen,
            }
        }

        (InteractionState::OpenIdle, Event::Submit { form }) => match form.finish() {
            Ok(draft) => Step::Transition {
                effects: vec![
                    Effect::Capture {
                        event: WAITLIST_SIGNUP,
                        properties: signup_properties(&draft),
                    },
                    Effect::Identify {
                        subject: draft.email.clone(),
                        traits: identify_traits(&draft),
                    },
                    Effect::ScheduleAutoClose,
                ],
                next: InteractionState::OpenSubmitted { draft },
            },
            Err(gap) => Step::Ignore {
                reason: IgnoreReason::IncompleteDraft(gap),
            },
        },

        (InteractionState::OpenSubmitted { .. }, Event::Submit { .. }) => Step::Ignore {
            reason: IgnoreReason::AlreadySubmitted,
        },

        (
            InteractionState::OpenIdle | InteractionState::OpenSubmitted { .. },
            Event::Close { .. },
        ) => Step::Transition {
            next: InteractionState::Closed,
            effects: vec![Effect::CancelAutoClose],
        },

        (InteractionState::Closed, Event::Close { .. } | Event::Submit { .. }) => Step::Ignore {
            reason: IgnoreReason::NotOpen,
        },

        (InteractionState::OpenSubmitted { .. }, Event::AutoCloseElapsed) => Step::Transition {
            next: InteractionState::Closed,
            effects: Vec::new(),
        },

        (InteractionState::Closed | InteractionState::OpenIdle, Event::AutoCloseElapsed) => {
            Step::Ignore {
                reason: IgnoreReason::NotSubmitted,
            }
        }
    }
}
