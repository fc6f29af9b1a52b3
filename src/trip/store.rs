//! Shared trip state cell.

use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::Reducer;

use super::intent::TripIntent;
use super::reducer::TripReducer;
use super::state::{Activity, TripState};

/// State before and after one dispatch.
#[derive(Debug, Clone, Default)]
pub struct Transition {
    pub before: TripState,
    pub after: TripState,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// True when this dispatch took the Free → Busy edge, i.e. the caller
    /// now owns the single in-flight start/end slot.
    pub fn acquired(&self) -> bool {
        self.before.activity == Activity::Free && self.after.activity == Activity::Busy
    }
}

/// Shared, observable trip state.
///
/// Every mutation goes through [`TripStore::dispatch`], which runs the
/// reducer while holding the channel's write lock. Observers get a
/// notification only when the state actually changed.
#[derive(Clone)]
pub struct TripStore {
    sender: Arc<watch::Sender<TripState>>,
}

impl TripStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(TripState::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn dispatch(&self, intent: TripIntent) -> Transition {
        let mut transition = Transition::default();
        self.sender.send_if_modified(|state| {
            let before = std::mem::take(state);
            let after = TripReducer::reduce(before.clone(), intent);
            *state = after.clone();
            transition = Transition { before, after };
            transition.changed()
        });
        transition
    }

    pub fn snapshot(&self) -> TripState {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TripState> {
        self.sender.subscribe()
    }
}

impl Default for TripStore {
    fn default() -> Self {
        Self::new()
    }
}
