//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a request for a state transition: a key press, a submit,
/// a tick. Reducers consume intents and produce new states; nothing else
/// reacts to them.
pub trait Intent: Send + 'static {}
