//! The single mutation entry point over the drawing state.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::action::Action;
use crate::playback::PlaybackScheduler;
use crate::reducer;
use crate::state::DrawingState;

/// Callback invoked with the fresh snapshot after every accepted transition.
pub type StateListener = Box<dyn Fn(&DrawingState) + Send>;

/// State container shared between the editor and the playback worker. All
/// reads and writes go through [`Shared::apply`], one atomic
/// read-modify-write under the state lock.
pub(crate) struct Shared {
    state: Mutex<DrawingState>,
    listeners: Mutex<Vec<StateListener>>,
}

impl Shared {
    fn new(state: DrawingState) -> Self {
        Self {
            state: Mutex::new(state),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the state with `transition`'s result and returns the new
    /// snapshot. Listeners are notified outside the state lock, and only
    /// when the transition actually changed something.
    pub(crate) fn apply<F>(&self, transition: F) -> DrawingState
    where
        F: FnOnce(&DrawingState) -> DrawingState,
    {
        let next = {
            let mut state = self.state.lock();
            let next = transition(&*state);
            if next == *state {
                return next;
            }
            *state = next.clone();
            next
        };

        for listener in self.listeners.lock().iter() {
            listener(&next);
        }
        next
    }

    fn snapshot(&self) -> DrawingState {
        self.state.lock().clone()
    }
}

/// The drawing/animation editor core: owns the shared state and the
/// playback scheduler, and sequences every mutation.
pub struct Editor {
    shared: Arc<Shared>,
    playback: PlaybackScheduler,
}

impl Editor {
    pub fn new() -> Self {
        Self::from_state(DrawingState::new())
    }

    /// Builds an editor around a restored state, e.g. a loaded project
    /// snapshot. Transient playback fields are reset.
    pub fn from_state(mut state: DrawingState) -> Self {
        state.playing = false;
        state.animation_points.clear();
        state.playback_cursor = 0;
        Self {
            shared: Arc::new(Shared::new(state)),
            playback: PlaybackScheduler::new(),
        }
    }

    /// A read-only snapshot of the current state.
    pub fn state(&self) -> DrawingState {
        self.shared.snapshot()
    }

    /// Registers a listener for state snapshots. Listeners also observe
    /// playback ticks.
    pub fn subscribe(&self, listener: impl Fn(&DrawingState) + Send + 'static) {
        self.shared.listeners.lock().push(Box::new(listener));
    }

    /// Applies one intent and returns the resulting snapshot. Rejected
    /// intents leave the state untouched.
    pub fn dispatch(&mut self, action: Action) -> DrawingState {
        log::debug!("dispatch {action:?}");

        let mut was_playing = false;
        let mut prev_speed = 0;
        let next = self.shared.apply(|state| {
            was_playing = state.playing;
            prev_speed = state.speed_index;
            reducer::reduce(state, action)
        });

        // Reconcile the scheduler with the playing flag the reducer decided
        // on. The flag is already visible under the lock, so a worker that
        // outlives its stop call cannot apply another tick.
        match (was_playing, next.playing) {
            (false, true) => {
                self.playback
                    .start(Arc::clone(&self.shared), next.frame_interval());
            }
            (true, false) => self.playback.stop(),
            (true, true) => {
                // A speed change mid-playback restarts the worker at the
                // new interval; the cursor lives in the state and carries on.
                if next.speed_index != prev_speed {
                    self.playback
                        .start(Arc::clone(&self.shared), next.frame_interval());
                }
            }
            (false, false) => {}
        }

        next
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
