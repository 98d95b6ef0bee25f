//! Export single-flight guard.
//!
//! DESIGN
//! ======
//! Export is rate-limited, not completion-tracked: one click opens a fixed
//! 1000 ms window during which further clicks are dropped silently, whether or
//! not the export request has finished (or was even sent; the empty-preview
//! precondition consumes the window too). The guard carries its own deadline
//! timestamp, so admission stays correct even when the host's release timer
//! fires late or not at all. Callers pass the clock reading in, which keeps
//! every path testable without waiting.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::consts::EXPORT_COOLDOWN_MS;

/// Single-flight guard for the export action: an in-flight flag plus the
/// wall-clock instant at which it expires.
#[derive(Clone, Debug, Default)]
pub struct ExportGuard {
    in_flight: bool,
    cooldown_until_ms: f64,
}

impl ExportGuard {
    /// Attempt to begin an export at `now_ms` (milliseconds on any steadily
    /// increasing clock; only differences matter).
    ///
    /// Returns `false`, changing nothing, while a prior attempt's cool-down
    /// window is still open. Otherwise arms the guard for a fresh window and
    /// returns `true`.
    pub fn try_begin(&mut self, now_ms: f64) -> bool {
        if self.in_flight && now_ms < self.cooldown_until_ms {
            return false;
        }
        self.in_flight = true;
        self.cooldown_until_ms = now_ms + f64::from(EXPORT_COOLDOWN_MS);
        true
    }

    /// Release the guard once the cool-down timer elapses. Releasing before
    /// the window ends is a no-op, so a misbehaving timer cannot shorten the
    /// rate limit.
    pub fn release(&mut self, now_ms: f64) {
        if now_ms >= self.cooldown_until_ms {
            self.in_flight = false;
        }
    }
}
