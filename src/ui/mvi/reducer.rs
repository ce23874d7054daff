//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen.
///
/// `reduce` must be pure: the next state is a function of the current
/// state and the intent, with no side effects. Anything that needs to
/// happen *because* of a transition is the caller's job.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
