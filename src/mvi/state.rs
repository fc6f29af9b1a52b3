//! Base trait for UI state.

/// Marker trait for state objects.
///
/// `PartialEq` lets observers skip redundant updates; `Default` gives the
/// starting state and allows `std::mem::take` during a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
