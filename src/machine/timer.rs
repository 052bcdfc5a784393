//! The auto-dismiss timer as an explicit owned handle.
//!
//! At most one auto-close may be pending at a time. Each `schedule`
//! mints a fresh token and supersedes whatever was pending, so a token
//! from an earlier arming can never fire a close into a later flow.

use std::time::Duration;

/// How long the confirmation stays up before the modal dismisses itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(3000);

/// Token identifying one arming of the auto-dismiss timer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AutoCloseToken(u64);

/// What the host needs to schedule: fire `token` after `delay`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingAutoClose {
    pub token: AutoCloseToken,
    pub delay: Duration,
}

/// Owned handle over the single pending auto-close.
#[derive(Debug)]
pub(crate) struct AutoCloseTimer {
    delay: Duration,
    next_token: u64,
    pending: Option<AutoCloseToken>,
}

impl AutoCloseTimer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_token: 0,
            pending: None,
        }
    }

    pub(crate) fn delay(&self) -> Duration {
        self.delay
    }

    pub(crate) fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Arm the timer, superseding any pending token.
    pub(crate) fn schedule(&mut self) -> AutoCloseToken {
        self.next_token += 1;
        let token = AutoCloseToken(self.next_token);
        self.pending = Some(token);
        token
    }

    /// Disarm the timer. Returns the token that was pending, if any.
    pub(crate) fn cancel(&mut self) -> Option<AutoCloseToken> {
        self.pending.take()
    }

    /// Consume `token` if it is the one currently pending.
    ///
    /// Returns `false` for stale tokens (cancelled or superseded), which
    /// the caller must treat as a no-op.
    pub(crate) fn consume(&mut self, token: AutoCloseToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn pending(&self) -> Option<PendingAutoClose> {
        self.pending.map(|token| PendingAutoClose {
            token,
            delay: self.delay,
        })
    }
}
