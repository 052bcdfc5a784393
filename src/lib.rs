//! Waitlist signup interaction core for the OVEL landing page.
//!
//! The landing page itself is static content; the one piece with real
//! state and behavior is the waitlist modal — open it from a tagged
//! call-to-action, submit the signup form, show the confirmation, and
//! dismiss automatically three seconds later, recording an analytics
//! trail along the way. This crate implements that flow as a pure
//! transition function wrapped in a thin imperative shell, so the whole
//! contract is testable without a browser or a live collector.
//!
//! # Core Concepts
//!
//! - **State**: [`InteractionState`] composes modal visibility and
//!   submission status so that impossible combinations cannot exist
//! - **Events and effects**: UI triggers go in as [`Event`]s; the pure
//!   [`core::step`] function returns the next state plus an ordered
//!   [`Effect`] list
//! - **Analytics port**: the [`AnalyticsSink`] capability is injected,
//!   fire-and-forget; a failing collector never blocks a signup
//! - **Timer handle**: the single auto-dismiss timer is an explicit
//!   owned handle with stale-token rejection
//!
//! # Example
//!
//! ```rust
//! use ovel_waitlist::{
//!     FormValues, ModalState, NullSink, Source, SubmissionState, WaitlistMachine,
//! };
//!
//! let mut machine = WaitlistMachine::new(NullSink);
//!
//! machine.open_modal(Source::HeroCta);
//! assert_eq!(machine.modal_state(), ModalState::Open);
//!
//! machine.submit(FormValues::new("sarah@techflow.io", "eng_manager", "11-50"));
//! assert_eq!(machine.submission_state(), SubmissionState::Submitted);
//! assert_eq!(
//!     machine.submitted_draft().unwrap().email,
//!     "sarah@techflow.io"
//! );
//!
//! // The host schedules the pending auto-close and fires it back in.
//! let pending = machine.pending_auto_close().expect("timer armed");
//! machine.auto_close(pending.token);
//! assert_eq!(machine.modal_state(), ModalState::Closed);
//! ```

pub mod analytics;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use analytics::{AnalyticsConfig, AnalyticsSink, NullSink, Properties, SinkError};
pub use machine::{AutoCloseToken, PendingAutoClose, WaitlistMachine, AUTO_CLOSE_DELAY};
pub use self::core::{
    CloseReason, DraftError, Effect, Event, FormValues, IgnoreReason, InteractionHistory,
    InteractionState, ModalState, Role, SignupDraft, Source, Step, SubmissionState, TeamSize,
    TransitionRecord,
};
