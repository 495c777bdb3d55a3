use std::time::{Duration, Instant};

/// How long feedback stays on screen after the last change.
pub const INDICATOR_TIMEOUT: Duration = Duration::from_millis(1000);

/// Transient on-screen confirmation of the last parameter change: a
/// heading (the active scroll mode) and a detail line (the new value).
///
/// A single record; showing again replaces the message and restarts the
/// countdown. The renderer polls it every frame.
#[derive(Debug, Default)]
pub struct Indicator {
    heading: String,
    detail: String,
    deadline: Option<Instant>,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the message and restarts the countdown.
    pub fn show(&mut self, heading: impl Into<String>, detail: impl Into<String>, now: Instant) {
        self.heading = heading.into();
        self.detail = detail.into();
        self.deadline = Some(now + INDICATOR_TIMEOUT);
    }

    /// The current message, or None once the countdown has lapsed.
    pub fn message(&self, now: Instant) -> Option<(&str, &str)> {
        match self.deadline {
            Some(deadline) if now < deadline => Some((&self.heading, &self.detail)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    /// Time left before the indicator disappears, if it is showing.
    /// Drives repaint scheduling.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        match self.deadline {
            Some(deadline) if now < deadline => Some(deadline - now),
            _ => None,
        }
    }
}
