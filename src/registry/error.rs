//! Dispatch errors.

use crate::core::{CallbackError, State};

/// Errors returned when dispatching a transition.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// No declared transition covers the `(from, to)` pair.
    #[error("\"{from}\" -> \"{to}\" is not a valid transition")]
    Invalid { from: State, to: State },

    /// The resolved callback failed. Carries its error untouched.
    #[error("{0}")]
    Callback(CallbackError),
}

impl TransitionError {
    /// True when the edge was rejected, false when a callback failed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Recover the callback's own error, if that is what failed.
    pub fn into_callback_error(self) -> Option<CallbackError> {
        match self {
            Self::Callback(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
