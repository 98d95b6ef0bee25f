//! Debounce ticketing and the one-shot post-clear suppression.
//!
//! DESIGN
//! ======
//! The host owns the actual 500 ms timer; this module owns every decision
//! around it. A schedule request hands out a numbered ticket and supersedes
//! whatever ticket was pending, so however many timers the host manages to
//! arm, at most the latest one is allowed to fire (last-write-wins). The
//! clear action arms a one-shot guard that swallows exactly the next request,
//! since clearing resets inputs whose change events would otherwise schedule
//! a render of an already-empty form.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Decision state behind the debounce timer: which scheduled callback is
/// still current, and whether the next schedule request must be swallowed.
#[derive(Clone, Debug, Default)]
pub struct RenderScheduler {
    next_ticket: u64,
    pending: Option<u64>,
    swallow_next: bool,
}

impl RenderScheduler {
    /// Ask to schedule a render after the quiet period.
    ///
    /// Returns the ticket the host should arm a timer for, or `None` when the
    /// request is swallowed by the post-clear guard (consuming it). Any
    /// previously pending ticket is superseded.
    pub fn request(&mut self) -> Option<u64> {
        if self.swallow_next {
            self.swallow_next = false;
            return None;
        }
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        Some(self.next_ticket)
    }

    /// A timer armed for `ticket` has elapsed. True when that ticket is still
    /// the current one; a superseded or cancelled ticket must not fire.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Clear-action bookkeeping: drop any pending ticket and arm the one-shot
    /// guard against the clear's own change events.
    pub fn suppress_next(&mut self) {
        self.pending = None;
        self.swallow_next = true;
    }

    /// Whether a scheduled render has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
