//! Trip state machine.
//!
//! `TripPhase` (Idle | Active) crossed with `Activity` (Free | Busy),
//! plus the minute-pack balance and the error line.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `TripState` and its parts
//! - `intent.rs` - poll results, action results and user edits
//! - `reducer.rs` - all transitions (pure, no side effects)
//! - `store.rs` - shared cell observers subscribe to

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::TripIntent;
pub use reducer::TripReducer;
pub use state::{Activity, TripPhase, TripState};
pub use store::{Transition, TripStore};
