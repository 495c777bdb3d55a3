use std::time::{Duration, Instant};

/// Window within which a second click turns a single click into a double.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Defers a secondary click until the double-click window has passed, so a
/// lone click and the first half of a double-click can be told apart.
///
/// A cooperative deadline, not a thread: the event loop polls it. Arming
/// while a click is pending restarts the window.
#[derive(Debug, Default)]
pub struct ClickArbiter {
    deadline: Option<Instant>,
}

impl ClickArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the deferral after a secondary release.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + DOUBLE_CLICK_WINDOW);
    }

    /// Cancels the pending click; the caller saw the second half of a
    /// double-click. Returns whether a click was actually pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// True exactly once when the window elapses without a second click:
    /// the pending click resolves to a single click.
    pub fn expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending click resolves, if one is pending.
    /// Drives repaint scheduling.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
