// Single-slot tick scheduler owned by the playback controller

use std::time::{Duration, Instant};

/// Identifies one scheduled tick.
///
/// A handle goes stale as soon as its tick is cancelled, claimed or replaced,
/// and a stale handle never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    session: u64,
    seq: u64,
}

impl TickHandle {
    /// Session the tick was scheduled for
    pub fn session(&self) -> u64 {
        self.session
    }
}

/// At most one outstanding tick; scheduling replaces the previous one
#[derive(Debug, Default)]
pub struct TickTimer {
    pending: Option<(TickHandle, Instant)>,
    seq: u64,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick for `session` at `due`, cancelling any earlier one
    pub fn schedule(&mut self, session: u64, due: Instant) -> TickHandle {
        self.seq += 1;
        let handle = TickHandle {
            session,
            seq: self.seq,
        };
        self.pending = Some((handle, due));
        handle
    }

    /// Drop the outstanding tick, if any
    pub fn cancel(&mut self) -> Option<TickHandle> {
        self.pending.take().map(|(handle, _)| handle)
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending.map(|(handle, _)| handle)
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.due_at().is_some_and(|due| now >= due)
    }

    /// Time left until the outstanding tick (zero if overdue)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due_at().map(|due| due.saturating_duration_since(now))
    }

    /// Consume the outstanding tick if `handle` is still the current one
    pub fn claim(&mut self, handle: TickHandle) -> bool {
        match self.pending {
            Some((current, _)) if current == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reschedule_invalidates_previous_handle() {
        let now = Instant::now();
        let mut timer = TickTimer::new();
        let first = timer.schedule(1, now);
        let second = timer.schedule(1, now + Duration::from_millis(5));

        assert_ne!(first, second);
        assert!(!timer.claim(first));
        assert!(timer.claim(second));
        assert!(timer.pending().is_none());
    }

    #[test]
    fn test_cancel_and_due() {
        let now = Instant::now();
        let mut timer = TickTimer::new();
        let handle = timer.schedule(3, now + Duration::from_millis(10));

        assert!(!timer.is_due(now));
        assert!(timer.is_due(now + Duration::from_millis(10)));
        assert_eq!(timer.remaining(now), Some(Duration::from_millis(10)));
        assert_eq!(timer.cancel(), Some(handle));
        assert!(!timer.claim(handle));
        assert_eq!(timer.remaining(now), None);
    }
}
