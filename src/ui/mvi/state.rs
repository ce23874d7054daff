//! Base trait for UI state in the MVI architecture.

/// Marker trait for state objects.
///
/// A state is a value: cloned to derive the next one, compared to detect
/// changes, and carrying everything its view needs to render. `Default`
/// gives reducers a take-and-replace path without an extra clone.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
