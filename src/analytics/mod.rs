//! Analytics boundary.
//!
//! The interaction core records user actions through the [`AnalyticsSink`]
//! port. Adapters on the other side decide what to do with the calls —
//! forward them to a hosted collector, buffer them, or drop them. The
//! core treats every call as fire-and-forget: nothing is awaited, nothing
//! is retried, and a failing adapter never blocks a transition.

pub mod config;
pub mod event;
pub mod sink;

pub use config::AnalyticsConfig;
pub use sink::{AnalyticsSink, NullSink, SinkError};

/// Ordered string-to-string payload map.
///
/// Ordering is deterministic so emitted payloads compare stably in tests.
pub type Properties = std::collections::BTreeMap<String, String>;
