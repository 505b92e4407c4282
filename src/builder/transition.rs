//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{CallbackError, State, States, Transition, TransitionConfig};

/// Builder for constructing transitions with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    from: Option<States>,
    to: Option<State>,
    config: TransitionConfig,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source states (required).
    pub fn from(mut self, states: impl Into<States>) -> Self {
        self.from = Some(states.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<State>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Name the transition (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.with_name(name);
        self
    }

    /// Attach a callback (optional).
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Transition, &State, &State) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.config = self.config.with_callback(callback);
        self
    }

    /// Layer a prepared config on top of what has been set so far.
    pub fn config(mut self, config: TransitionConfig) -> Self {
        self.config = self.config.then(config);
        self
    }

    /// Build the transition.
    ///
    /// An explicitly empty source set is accepted here and rejected later by
    /// [`Registry::build`](crate::Registry::build).
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromStates)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition::new(from, to).configure(self.config))
    }
}
