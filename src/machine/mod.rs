//! Imperative shell around the pure core.
//!
//! [`WaitlistMachine`] feeds UI triggers through the transition function,
//! keeps the history, drives the injected analytics sink, and owns the
//! single auto-dismiss timer handle. Everything impure about the flow
//! (wall-clock timestamps, the sink, timer bookkeeping) lives here.

mod machine;
mod timer;

pub use machine::WaitlistMachine;
pub use timer::{AutoCloseToken, PendingAutoClose, AUTO_CLOSE_DELAY};
