//! Submission session: owns the current phase and the single outcome slot.
//!
//! A session may be shared between threads (e.g. a worker running the
//! request and a front end polling [`Session::phase`]). Only one submission
//! can be in flight; a second `submit` while busy is refused.

use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::shorten::{Phase, ShortenOutcome, Shortener};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a shortening request is already in progress")]
    Busy,
}

#[derive(Debug, Default)]
struct State {
    phase: Phase,
    outcome: Option<ShortenOutcome>,
}

type PhaseHook = Box<dyn Fn(Phase) + Send + Sync>;

pub struct Session<T> {
    shortener: Shortener<T>,
    state: Mutex<State>,
    on_phase: Option<PhaseHook>,
}

impl<T: Transport> Session<T> {
    pub fn new(shortener: Shortener<T>) -> Self {
        Self {
            shortener,
            state: Mutex::new(State::default()),
            on_phase: None,
        }
    }

    /// Calls `hook` on every phase change, after the session state is updated.
    pub fn with_phase_hook(mut self, hook: impl Fn(Phase) + Send + Sync + 'static) -> Self {
        self.on_phase = Some(Box::new(hook));
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, phase: Phase) {
        if let Some(hook) = &self.on_phase {
            hook(phase);
        }
    }

    /// Runs one submission and stores its outcome, replacing any previous one.
    ///
    /// The terminal phase and the outcome are published together, so a
    /// reader never sees `Succeeded`/`Failed` without the matching outcome.
    pub fn submit(&self, raw_url: &str) -> Result<ShortenOutcome, SessionError> {
        {
            let mut state = self.lock();
            if state.phase.is_in_flight() {
                tracing::debug!(phase = ?state.phase, "submission refused while busy");
                return Err(SessionError::Busy);
            }
            // Claim the slot before releasing the lock.
            state.outcome = None;
            state.phase = Phase::Validating;
        }
        let mut guard = InFlight {
            state: &self.state,
            done: false,
        };

        let mut terminal = Phase::Failed;
        let result = self.shortener.try_shorten_observed(raw_url, &mut |phase| {
            if phase.is_terminal() {
                terminal = phase;
                return;
            }
            self.lock().phase = phase;
            self.notify(phase);
        });
        let outcome = ShortenOutcome::from(result);

        {
            let mut state = self.lock();
            state.phase = terminal;
            state.outcome = Some(outcome.clone());
        }
        guard.done = true;
        drop(guard);

        self.notify(terminal);
        Ok(outcome)
    }

    /// Clears the outcome and returns to `Idle`.
    pub fn reset(&self) -> Result<(), SessionError> {
        let mut state = self.lock();
        if state.phase.is_in_flight() {
            return Err(SessionError::Busy);
        }
        state.phase = Phase::Idle;
        state.outcome = None;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    pub fn outcome(&self) -> Option<ShortenOutcome> {
        self.lock().outcome.clone()
    }

    pub fn short_url(&self) -> Option<String> {
        self.lock()
            .outcome
            .as_ref()
            .and_then(|o| o.short_url().map(str::to_string))
    }
}

/// Returns an unfinished submission to `Idle` if it unwinds, so a panicking
/// hook or transport does not leave the session busy for good.
struct InFlight<'a> {
    state: &'a Mutex<State>,
    done: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::warn!(phase = ?state.phase, "submission aborted, returning to idle");
        state.phase = Phase::Idle;
        state.outcome = None;
    }
}
