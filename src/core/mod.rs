//! Core transition model.
//!
//! This module contains the immutable building blocks of a transition table:
//! - State labels and source-state sets
//! - Edge keys used to index the registry
//! - Transition declarations with optional names and callbacks

mod edge;
mod state;
mod transition;

pub use edge::EdgeKey;
pub use state::{State, States};
pub use transition::{Callback, CallbackError, Transition, TransitionConfig};

pub(crate) use state::UniqueStates;
pub(crate) use transition::states_of;
