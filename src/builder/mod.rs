//! Builder API for ergonomic transition tables.
//!
//! This module provides fluent builders and macros for declaring transitions
//! and collecting them into a [`Registry`](crate::Registry).

pub mod error;
pub mod macros;
pub mod registry;
pub mod transition;

pub use error::BuildError;
pub use registry::RegistryBuilder;
pub use transition::TransitionBuilder;

use crate::core::{State, Transition};

/// Create an unnamed transition with a single source state.
///
/// # Example
///
/// ```
/// use edgecheck::builder::simple_transition;
/// use edgecheck::State;
///
/// let transition = simple_transition("red", "green");
/// assert!(transition.transition_from(&State::new("red")).is_ok());
/// ```
pub fn simple_transition(from: impl Into<State>, to: impl Into<State>) -> Transition {
    let from: State = from.into();
    Transition::new(from, to)
}

/// Create a transition with a single source state and a name.
pub fn named_transition(
    from: impl Into<State>,
    to: impl Into<State>,
    name: impl Into<String>,
) -> Transition {
    simple_transition(from, to).with_name(name)
}
