//! Inline title editor for a single task (idle ↔ editing).

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::EditorState;
