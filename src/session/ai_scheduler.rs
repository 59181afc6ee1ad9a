use std::time::{Duration, Instant};

/// At most one pending AI action, due at a fixed instant.
///
/// Scheduling replaces any pending action and cancelling drops it, so an
/// action scheduled before an undo can never fire against the restored state.
#[derive(Debug, Default)]
pub struct AiScheduler {
    due: Option<Instant>,
}

impl AiScheduler {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Drops the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Consumes the pending action if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
