//! Focus debounce
//! Tells a switch between views apart from a switch to another application

/// ## focus/ Invariants
///
/// - A deferred action runs at most once.
/// - `Pending` moves to exactly one of `Fired` or `Cancelled`, atomically.
/// - Cancelling a fired or cancelled action is a no-op.
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default delay between deactivation and "the user left the application"
pub const DEFAULT_FOCUS_DEBOUNCE: Duration = Duration::from_millis(250);

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// State of a deferred action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

impl TimerState {
    fn from_raw(raw: u8) -> Self {
        match raw {
            PENDING => TimerState::Pending,
            FIRED => TimerState::Fired,
            _ => TimerState::Cancelled,
        }
    }
}

/// An action that runs once on a background thread after a delay
#[derive(Debug)]
pub struct DeferredAction {
    state: Arc<AtomicU8>,
    handle: Option<JoinHandle<()>>,
}

impl DeferredAction {
    /// Run `f` after `delay` unless cancelled first
    pub fn schedule<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let state = Arc::new(AtomicU8::new(PENDING));
        let thread_state = state.clone();
        let deadline = Instant::now() + delay;

        let handle = thread::spawn(move || {
            // park_timeout may wake early; re-check until the deadline passes
            loop {
                if thread_state.load(Ordering::Acquire) != PENDING {
                    return;
                }
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::park_timeout(deadline - now);
            }
            if thread_state
                .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                f();
            }
        });

        Self {
            state,
            handle: Some(handle),
        }
    }

    /// Cancel the action; returns whether this call stopped it from running
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if cancelled {
            if let Some(handle) = &self.handle {
                handle.thread().unpark();
            }
        }
        cancelled
    }

    pub fn status(&self) -> TimerState {
        TimerState::from_raw(self.state.load(Ordering::Acquire))
    }

    pub fn is_pending(&self) -> bool {
        self.status() == TimerState::Pending
    }

    /// Wait for the background thread to finish
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("deferred action panicked");
            }
        }
    }
}

impl Drop for DeferredAction {
    fn drop(&mut self) {
        // An abandoned action must not fire later
        self.cancel();
    }
}

/// How a surface regained focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Focus moved from another view of this application
    ViewSwitch,
    /// Focus came back from another application
    ApplicationSwitch,
}

/// Debounces deactivate/activate pairs
#[derive(Debug)]
pub struct FocusTracker {
    delay: Duration,
    pending: Option<DeferredAction>,
}

impl FocusTracker {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// A surface lost focus; start the debounce timer
    pub fn on_deactivated(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.pending = Some(DeferredAction::schedule(self.delay, || {
            tracing::trace!("focus left the application");
        }));
    }

    /// A surface gained focus
    pub fn on_activated(&mut self) -> Activation {
        match self.pending.take() {
            Some(timer) if timer.cancel() => Activation::ViewSwitch,
            _ => Activation::ApplicationSwitch,
        }
    }

    /// Whether a deactivation is still waiting to be resolved
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(DeferredAction::is_pending)
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_DEBOUNCE)
    }
}
