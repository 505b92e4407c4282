//! Build errors for transitions and registries.

use crate::core::{EdgeKey, State};
use thiserror::Error;

/// Errors that can occur when building transitions and registries.
///
/// These describe a malformed transition table, not bad input at dispatch
/// time. Callers should treat them as fatal.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("transition to \"{to}\" must have at least one source state")]
    EmptySources { to: State },

    #[error("{key} is a duplicate transition")]
    DuplicateEdge { key: EdgeKey },

    #[error("Transition source states not specified. Call .from(states)")]
    MissingFromStates,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
