//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable view state in this crate flows through the same
//! pipeline:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: a value-type snapshot of everything a view needs to render
//! - **Intent**: a user gesture or system event
//! - **Reducer**: a pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
