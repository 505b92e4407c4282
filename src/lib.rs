//! Edgecheck: a stateless finite-state transition validator
//!
//! Edgecheck answers one question at run time: is moving from one state to
//! another allowed? A transition table is declared once, indexed into a
//! [`Registry`], and then queried with `(from, to)` pairs. Valid moves run
//! an optional callback; invalid ones return an ordinary error. The crate
//! never tracks a "current state" itself.
//!
//! # Core Concepts
//!
//! - **State**: an opaque, case-sensitive label
//! - **Transition**: a rule from a set of source states to one destination,
//!   optionally named and optionally carrying a callback
//! - **Registry**: the build-once index over a transition table
//! - **DOT**: tables can be exported to and imported from graph text
//!
//! # Example
//!
//! ```rust
//! use edgecheck::{Registry, State, Transition};
//!
//! let registry = Registry::new(vec![
//!     Transition::new(["red"], "green"),
//!     Transition::new(["green"], "yellow"),
//!     Transition::new(["yellow"], "red"),
//! ]);
//!
//! let green = State::new("green");
//! assert!(registry.handle(&green, &State::new("yellow")).is_ok());
//! assert_eq!(
//!     registry.handle(&green, &State::new("red")).unwrap_err().to_string(),
//!     r#""Green" -> "Red" is not a valid transition"#,
//! );
//! ```

pub mod builder;
pub mod core;
pub mod dot;
pub mod registry;

// Re-export commonly used types
pub use crate::builder::{BuildError, RegistryBuilder, TransitionBuilder};
pub use crate::core::{Callback, CallbackError, EdgeKey, State, States, Transition, TransitionConfig};
pub use crate::registry::{Registry, TransitionError};
