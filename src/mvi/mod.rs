//! Model-View-Intent (MVI) primitives.
//!
//! Trip state flows one way:
//!
//! ```text
//! API response / key press ──→ Intent ──→ Reducer ──→ State ──→ host + view
//!        ↑                                                       │
//!        └───────────────────────────────────────────────────────┘
//! ```
//!
//! Side effects (HTTP calls, popups, button updates) happen around the
//! reducer, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
