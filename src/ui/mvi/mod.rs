//! Model-View-Intent primitives shared by every view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── App (I/O) ←──────────┘
//! ```
//!
//! Reducers never perform I/O. The `App` controller issues backend calls
//! and feeds their outcomes back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
