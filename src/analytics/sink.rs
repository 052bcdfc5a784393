//! The injected analytics capability.

use super::Properties;
use thiserror::Error;

/// A sink adapter could not deliver a call.
///
/// The machine shell logs these and moves on; they never surface to the
/// visitor or reverse a transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analytics collector unavailable: {reason}")]
pub struct SinkError {
    pub reason: String,
}

impl SinkError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Port for recording user actions to an external analytics collector.
///
/// Implementations must not block: deliver asynchronously, buffer, or
/// drop. Returning an error is allowed — the caller discards it — but
/// implementations must not panic.
///
/// # Example
///
/// ```rust
/// use ovel_waitlist::{AnalyticsSink, Properties, SinkError};
///
/// /// Counts calls instead of delivering them.
/// struct CountingSink {
///     captures: usize,
///     identifies: usize,
/// }
///
/// impl AnalyticsSink for CountingSink {
///     fn capture(&mut self, _event: &str, _properties: &Properties) -> Result<(), SinkError> {
///         self.captures += 1;
///         Ok(())
///     }
///
///     fn identify(&mut self, _subject: &str, _traits: &Properties) -> Result<(), SinkError> {
///         self.identifies += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait AnalyticsSink {
    /// Record a discrete event.
    fn capture(&mut self, event: &str, properties: &Properties) -> Result<(), SinkError>;

    /// Associate subsequent events with a stable subject identity.
    fn identify(&mut self, subject: &str, traits: &Properties) -> Result<(), SinkError>;
}

/// Sink that discards every call.
///
/// Useful for hosts that run the flow without a collector wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn capture(&mut self, _event: &str, _properties: &Properties) -> Result<(), SinkError> {
        Ok(())
    }

    fn identify(&mut self, _subject: &str, _traits: &Properties) -> Result<(), SinkError> {
        Ok(())
    }
}
