//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action (submit a code, press the main button)
/// or a system event (a poll result, a finished request).
pub trait Intent: Send + 'static {}
