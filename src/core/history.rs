//! Transition history tracking.
//!
//! Immutable record of the interaction flow over one page session,
//! useful for diagnosing analytics gaps without a debugger attached.
//! Nothing here is persisted; the history dies with the page.

use super::state::InteractionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use ovel_waitlist::core::{InteractionState, TransitionRecord};
///
/// let record = TransitionRecord {
///     from: InteractionState::Closed,
///     to: InteractionState::OpenIdle,
///     timestamp: Utc::now(),
///     trigger: "open".to_string(),
/// };
/// assert_eq!(record.trigger, "open");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: InteractionState,
    /// The state being transitioned to
    pub to: InteractionState,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The event name that caused the transition
    pub trigger: String,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use ovel_waitlist::core::{InteractionHistory, InteractionState, TransitionRecord};
///
/// let history = InteractionHistory::new();
/// let history = history.record(TransitionRecord {
///     from: InteractionState::Closed,
///     to: InteractionState::OpenIdle,
///     timestamp: Utc::now(),
///     trigger: "open".to_string(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2); // Closed -> OpenIdle
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InteractionHistory {
    transitions: Vec<TransitionRecord>,
}

impl InteractionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&InteractionState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: InteractionState, to: InteractionState, trigger: &str) -> TransitionRecord {
        TransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
            trigger: trigger.to_string(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = InteractionHistory::new();
        assert_eq!(history.transitions().len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = InteractionHistory::new();
        let new_history = history.record(record(
            InteractionState::Closed,
            InteractionState::OpenIdle,
            "open",
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = InteractionHistory::new();

        history = history.record(record(
            InteractionState::Closed,
            InteractionState::OpenIdle,
            "open",
        ));
        history = history.record(record(
            InteractionState::OpenIdle,
            InteractionState::Closed,
            "close",
        ));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &InteractionState::Closed);
        assert_eq!(path[1], &InteractionState::OpenIdle);
        assert_eq!(path[2], &InteractionState::Closed);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let later = start + chrono::Duration::milliseconds(250);

        let history = InteractionHistory::new()
            .record(TransitionRecord {
                from: InteractionState::Closed,
                to: InteractionState::OpenIdle,
                timestamp: start,
                trigger: "open".to_string(),
            })
            .record(TransitionRecord {
                from: InteractionState::OpenIdle,
                to: InteractionState::Closed,
                timestamp: later,
                trigger: "close".to_string(),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn trigger_names_are_kept() {
        let history = InteractionHistory::new().record(record(
            InteractionState::Closed,
            InteractionState::OpenIdle,
            "open",
        ));

        assert_eq!(history.transitions()[0].trigger, "open");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = InteractionHistory::new().record(record(
            InteractionState::Closed,
            InteractionState::OpenIdle,
            "open",
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: InteractionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(
            history.transitions().len(),
            deserialized.transitions().len()
        );
    }
}
