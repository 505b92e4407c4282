//! Builder for constructing registries.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::Transition;
use crate::registry::Registry;

/// Builder for collecting transitions into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    transitions: Vec<Transition>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the registry, validating every edge.
    pub fn build(self) -> Result<Registry, BuildError> {
        Registry::build(self.transitions)
    }
}
