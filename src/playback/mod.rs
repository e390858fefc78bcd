//! Playback controller
//!
//! [`Controller`] owns one [`Session`] (a history plus a cursor) and exposes
//! the transport operations used by the presentation layer. It never looks
//! inside snapshots, so it works the same for every family.
//!
//! # States
//!
//! ```text
//! Idle ──initialize──▶ Ready ──start──▶ Playing ◀──start── Paused
//!                        │                │  └──pause──────▶ │
//!                        └──step──▶ Paused│                  │
//!                                         └──last index──▶ Concluded
//! ```
//!
//! # Timing
//!
//! Playback is host-driven: the controller keeps a single [`TickTimer`]
//! slot and the host either calls [`Controller::poll`] with the current
//! time or fires a [`TickHandle`] it obtained from
//! [`Controller::pending_tick`]. Every transition other than a tick cancels
//! the slot first, so a handle from an earlier session or an earlier
//! play/pause cycle can never move the cursor.

pub mod session;
pub mod timer;

pub use session::Session;
pub use timer::{TickHandle, TickTimer};

use crate::algorithms::{build_history, InvalidInputError};
use crate::config::tick_delay;
use crate::input::{generate_input, AlgorithmInput, Family};
use crate::snapshot::{History, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Playback lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No history yet
    Idle,
    /// History built, cursor at 0
    Ready,
    /// Auto-advancing on ticks
    Playing,
    /// Cursor frozen, resumable
    Paused,
    /// Cursor at the last index
    Concluded,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Ready => "ready",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Concluded => "concluded",
        })
    }
}

/// State machine driving replay of one family's history
pub struct Controller<R = StdRng> {
    family: Family,
    size_hint: Option<usize>,
    input: Option<AlgorithmInput>,
    session: Option<Session>,
    state: PlaybackState,
    timer: TickTimer,
    delay: Duration,
    rng: R,
    sessions_created: u64,
}

impl Controller<StdRng> {
    /// Controller seeded from the operating system
    pub fn from_os_rng(family: Family) -> Self {
        Controller::new(family, StdRng::from_os_rng())
    }

    /// Controller with a reproducible input stream
    pub fn seeded(family: Family, seed: u64) -> Self {
        Controller::new(family, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Controller<R> {
    pub fn new(family: Family, rng: R) -> Self {
        Controller {
            family,
            size_hint: None,
            input: None,
            session: None,
            state: PlaybackState::Idle,
            timer: TickTimer::new(),
            delay: tick_delay(family),
            rng,
            sessions_created: 0,
        }
    }

    /// Override the per-family tick delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn current_state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.session.as_ref().map(Session::current)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().map(Session::cursor)
    }

    pub fn history(&self) -> Option<&History> {
        self.session.as_ref().map(Session::history)
    }

    /// Input the current history was built from, if known
    pub fn input(&self) -> Option<&AlgorithmInput> {
        self.input.as_ref()
    }

    pub fn size_hint(&self) -> Option<usize> {
        self.size_hint
    }

    /// Size used by the next `regenerate`; clamped by the generator
    pub fn set_size_hint(&mut self, hint: Option<usize>) {
        self.size_hint = hint;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle of the outstanding tick, for hosts that own the timer
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.timer.pending()
    }

    /// Time until the outstanding tick is due
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Install a prebuilt history; any state goes to `Ready`.
    ///
    /// The history is not tied to a stored input, so `reset` rewinds it.
    /// A history of another family switches the controller to that family
    /// and its tick delay.
    pub fn initialize(&mut self, history: History) {
        if history.family() != self.family {
            self.family = history.family();
            self.delay = tick_delay(self.family);
        }
        self.input = None;
        self.install(history);
    }

    /// Build a history for `input` and install it.
    ///
    /// On error nothing changes.
    pub fn load(&mut self, input: AlgorithmInput) -> Result<(), InvalidInputError> {
        let history = build_history(self.family, &input)?;
        self.input = Some(input);
        self.install(history);
        Ok(())
    }

    /// `Ready`/`Paused` -> `Playing`; a concluded run is replaced by a
    /// freshly generated one first.
    ///
    /// Returns false when there is nothing to play.
    pub fn start(&mut self, now: Instant) -> bool {
        match self.state {
            PlaybackState::Idle | PlaybackState::Playing => return false,
            PlaybackState::Concluded => {
                if self.regenerate().is_err() {
                    return false;
                }
            }
            PlaybackState::Ready | PlaybackState::Paused => {}
        }

        let Some(session) = &self.session else {
            return false;
        };
        if session.is_at_end() {
            self.transition(PlaybackState::Concluded);
            return false;
        }

        let id = session.id();
        self.timer.schedule(id, now + self.delay);
        self.transition(PlaybackState::Playing);
        true
    }

    /// `Playing` -> `Paused`, cancelling the outstanding tick
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.timer.cancel();
        self.transition(PlaybackState::Paused);
        true
    }

    /// Advance by one while not playing
    pub fn step(&mut self) -> bool {
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused => self.advance(),
            _ => false,
        }
    }

    /// Re-run the current input from scratch
    pub fn reset(&mut self) -> Result<(), InvalidInputError> {
        self.cancel_to_idle();
        if let Some(input) = self.input.take() {
            return self.load(input);
        }
        // No stored input: the history itself is the run, rewind it
        if let Some(session) = self.session.take() {
            self.install(session.into_history());
        }
        Ok(())
    }

    /// Draw a new input and build its history
    pub fn regenerate(&mut self) -> Result<(), InvalidInputError> {
        self.cancel_to_idle();
        let input = generate_input(self.family, self.size_hint, &mut self.rng);
        self.load(input)
    }

    /// Switch family and regenerate
    pub fn set_family(&mut self, family: Family) -> Result<(), InvalidInputError> {
        self.cancel_to_idle();
        self.family = family;
        self.delay = tick_delay(family);
        self.input = None;
        self.session = None;
        self.regenerate()
    }

    /// Fire the outstanding tick if it is due; true if the cursor moved
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.is_due(now) {
            return false;
        }
        match self.timer.pending() {
            Some(handle) => self.fire(handle, now),
            None => false,
        }
    }

    /// Fire a tick by handle; stale handles are ignored
    pub fn fire(&mut self, handle: TickHandle, now: Instant) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let current_session = self.session.as_ref().map(Session::id);
        if current_session != Some(handle.session()) || !self.timer.claim(handle) {
            trace!(session = handle.session(), "ignored stale tick");
            return false;
        }
        self.tick(now)
    }

    fn tick(&mut self, now: Instant) -> bool {
        let moved = self.advance();
        if self.state == PlaybackState::Playing {
            if let Some(session) = &self.session {
                let id = session.id();
                self.timer.schedule(id, now + self.delay);
            }
        }
        trace!(cursor = ?self.cursor(), state = %self.state, "tick");
        moved
    }

    /// Move the cursor one step; reaching the last index concludes the run
    fn advance(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let moved = session.advance();
        if session.is_at_end() {
            self.timer.cancel();
            self.transition(PlaybackState::Concluded);
        } else if self.state == PlaybackState::Ready {
            self.transition(PlaybackState::Paused);
        }
        moved
    }

    fn install(&mut self, history: History) {
        self.timer.cancel();
        self.sessions_created += 1;
        debug!(
            family = self.family.id(),
            session = self.sessions_created,
            snapshots = history.len(),
            "new playback session"
        );
        self.session = Some(Session::new(self.sessions_created, history));
        self.transition(PlaybackState::Ready);
    }

    fn cancel_to_idle(&mut self) {
        self.timer.cancel();
        self.transition(PlaybackState::Idle);
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "playback transition");
            self.state = next;
        }
    }
}
