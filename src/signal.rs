//! Completion signals bridging interrupt context to the console task.
//!
//! # Architecture
//!
//! ```text
//! RX/TX interrupt          CompletionSignal          Console task
//! ───────────────          ────────────────          ────────────
//!
//! raise() ──────────────▶ [raised: bool] ──────────▶ wait(timeout)
//! O(1), never blocks       one per direction         sleeps, no polling
//! ```
//!
//! The interrupt side only ever calls [`CompletionSignal::raise`]; it touches
//! no buffers. The task side sleeps in [`CompletionSignal::wait`] until the
//! signal is raised or the timeout elapses.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Result of waiting on a completion signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The signal was raised; the raised state has been consumed.
    Signaled,
    /// The timeout elapsed with no completion reported.
    TimedOut,
}

impl WaitOutcome {
    /// True if the completion was observed.
    pub fn is_signaled(self) -> bool {
        self == WaitOutcome::Signaled
    }
}

/// Binary, non-counting completion signal.
///
/// Raised at most once between two waits: raising an already-raised signal
/// is harmless, and a wait consumes the raised state. Created once at
/// startup and shared with the transport driver for the process lifetime.
pub struct CompletionSignal {
    raised: Mutex<bool>,
    cond: Condvar,
}

impl CompletionSignal {
    /// Create an unsignaled completion signal.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Report a completion. Callable from interrupt context: O(1),
    /// idempotent, wakes at most one waiting task.
    pub fn raise(&self) {
        let mut raised = self.raised.lock();
        *raised = true;
        drop(raised);
        self.cond.notify_one();
    }

    /// Block until the signal is raised, or until `timeout` elapses.
    ///
    /// `None` waits indefinitely. Task context only; the calling task
    /// consumes no CPU while suspended.
    pub fn wait(&self, timeout: Option<Duration>) -> WaitOutcome {
        let mut raised = self.raised.lock();
        match timeout {
            None => {
                while !*raised {
                    self.cond.wait(&mut raised);
                }
            }
            Some(limit) => {
                let deadline = Instant::now() + limit;
                while !*raised {
                    if self.cond.wait_until(&mut raised, deadline).timed_out() {
                        if *raised {
                            break;
                        }
                        return WaitOutcome::TimedOut;
                    }
                }
            }
        }
        *raised = false;
        WaitOutcome::Signaled
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}
