//! State machine shell that executes the flow against a real sink.

use crate::analytics::AnalyticsSink;
use crate::core::{
    step, CloseReason, Effect, Event, FormValues, InteractionHistory, InteractionState, ModalState,
    SignupDraft, Source, Step, SubmissionState, TransitionRecord,
};
use crate::machine::timer::{AutoCloseTimer, AutoCloseToken, PendingAutoClose, AUTO_CLOSE_DELAY};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, trace};

/// Imperative shell around the pure transition function.
///
/// Owns the current state, the live form-entry value, the transition
/// history, the single auto-dismiss timer handle, and the injected
/// analytics sink. UI triggers come in through the four boundary
/// actions; the presentation layer re-renders from the read surface.
///
/// # Example
///
/// ```rust
/// use ovel_waitlist::{FormValues, ModalState, NullSink, Source, SubmissionState, WaitlistMachine};
///
/// let mut machine = WaitlistMachine::new(NullSink);
///
/// machine.open_modal(Source::HeroCta);
/// assert_eq!(machine.modal_state(), ModalState::Open);
///
/// machine.submit(FormValues::new("sarah@techflow.io", "eng_manager", "11-50"));
/// assert_eq!(machine.submission_state(), SubmissionState::Submitted);
///
/// let pending = machine.pending_auto_close().expect("timer armed");
/// machine.auto_close(pending.token);
/// assert_eq!(machine.modal_state(), ModalState::Closed);
/// ```
pub struct WaitlistMachine<S> {
    state: InteractionState,
    email_entry: String,
    history: InteractionHistory,
    timer: AutoCloseTimer,
    sink: S,
}

impl<S: AnalyticsSink> WaitlistMachine<S> {
    /// Create a machine in the closed state with the default
    /// [`AUTO_CLOSE_DELAY`].
    pub fn new(sink: S) -> Self {
        Self {
            state: InteractionState::Closed,
            email_entry: String::new(),
            history: InteractionHistory::new(),
            timer: AutoCloseTimer::new(AUTO_CLOSE_DELAY),
            sink,
        }
    }

    /// Override the auto-dismiss delay the host is asked to schedule.
    pub fn with_auto_close_delay(mut self, delay: Duration) -> Self {
        self.timer.set_delay(delay);
        self
    }

    /// Open the modal from the tagged call-to-action.
    pub fn open_modal(&mut self, source: Source) {
        self.dispatch(Event::Open { source });
    }

    /// Dismiss the modal via the close button.
    pub fn close_modal(&mut self) {
        self.close_modal_with(CloseReason::Button);
    }

    /// Dismiss the modal, naming how.
    pub fn close_modal_with(&mut self, reason: CloseReason) {
        self.dispatch(Event::Close { reason });
    }

    /// Submit the signup form. An incomplete form is a no-op.
    pub fn submit(&mut self, form: FormValues) {
        self.dispatch(Event::Submit { form });
    }

    /// Timer-driven close. Stale tokens (cancelled or superseded) are
    /// ignored, so a manual close racing the timer stays idempotent.
    pub fn auto_close(&mut self, token: AutoCloseToken) {
        if !self.timer.consume(token) {
            trace!(?token, "stale auto-close token ignored");
            return;
        }
        self.dispatch(Event::AutoCloseElapsed);
    }

    /// Track the email field as the visitor types.
    ///
    /// Kept across close/reopen; distinct from the draft captured at
    /// submission time.
    pub fn update_email(&mut self, value: impl Into<String>) {
        self.email_entry = value.into();
    }

    /// Current position of the flow.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Modal visibility projection.
    pub fn modal_state(&self) -> ModalState {
        self.state.modal_state()
    }

    /// Submission status projection.
    pub fn submission_state(&self) -> SubmissionState {
        self.state.submission_state()
    }

    /// The live email field value.
    pub fn email_entry(&self) -> &str {
        &self.email_entry
    }

    /// The draft frozen at submission time; what the confirmation
    /// message renders from.
    pub fn submitted_draft(&self) -> Option<&SignupDraft> {
        self.state.submitted_draft()
    }

    /// What the host must schedule, if an auto-close is pending.
    pub fn pending_auto_close(&self) -> Option<PendingAutoClose> {
        self.timer.pending()
    }

    /// The configured auto-dismiss delay.
    pub fn auto_close_delay(&self) -> Duration {
        self.timer.delay()
    }

    /// Transition history (pure).
    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    /// The injected sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn dispatch(&mut self, event: Event) {
        match step(&self.state, &event) {
            Step::Transition { next, effects } => {
                debug!(
                    from = self.state.name(),
                    to = next.name(),
                    trigger = event.name(),
                    "transition"
                );

                let record = TransitionRecord {
                    from: self.state.clone(),
                    to: next.clone(),
                    timestamp: Utc::now(),
                    trigger: event.name().to_string(),
                };
                self.history = self.history.record(record);
                self.state = next;

                for effect in effects {
                    self.run(effect);
                }
            }
            Step::Ignore { reason } => {
                trace!(
                    state = self.state.name(),
                    trigger = event.name(),
                    reason = ?reason,
                    "event ignored"
                );
            }
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Capture { event, properties } => {
                if let Err(err) = self.sink.capture(event, &properties) {
                    debug!(event, %err, "analytics capture dropped");
                }
            }
            Effect::Identify { subject, traits } => {
                if let Err(err) = self.sink.identify(&subject, &traits) {
                    debug!(%err, "analytics identify dropped");
                }
            }
            Effect::ScheduleAutoClose => {
                let token = self.timer.schedule();
                trace!(
                    ?token,
                    delay_ms = self.timer.delay().as_millis() as u64,
                    "auto-close scheduled"
                );
            }
            Effect::CancelAutoClose => {
                if self.timer.cancel().is_some() {
                    trace!("pending auto-close cancelled");
                }
            }
        }
    }
}
