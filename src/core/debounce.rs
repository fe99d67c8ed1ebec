use std::time::Duration;
use tokio::time::Instant;

/// Quiet window applied to search input before the text is committed
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Trailing-edge debouncer for the search box
///
/// Each `update` replaces any pending value and re-arms the full quiet
/// window, so only the text as of the last keystroke is ever committed.
/// The owner drives time explicitly: it sleeps until [`deadline`] and then
/// calls [`poll`], which keeps the type deterministic under a paused test
/// clock.
///
/// [`deadline`]: Debouncer::deadline
/// [`poll`]: Debouncer::poll
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Stage `value` and restart the quiet window from `now`. Any previously
    /// staged value is discarded unseen.
    pub fn update(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.quiet,
        });
    }

    /// Drop the staged value without committing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the staged value becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Commit the staged value if its deadline has passed. At most one
    /// commit per staged value; later polls return `None` until the next
    /// `update`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
