//! Transition declarations and their configuration.

use super::state::{State, States, UniqueStates};
use crate::registry::{Registry, TransitionError};
use std::fmt;
use std::sync::Arc;

/// Error type returned by callbacks. Any `std::error::Error` converts into it.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Side effect run when a transition is dispatched.
///
/// Receives the matched transition and the concrete `(from, to)` pair.
pub type Callback =
    Arc<dyn Fn(&Transition, &State, &State) -> Result<(), CallbackError> + Send + Sync>;

/// Optional overrides for a transition's name and callback.
///
/// Used at declaration time through [`Transition::configure`] and at call
/// time through [`Registry::handle_with`]. Each setter overwrites the
/// previous value, so the last write wins per field.
#[derive(Clone, Default)]
pub struct TransitionConfig {
    name: Option<String>,
    callback: Option<Callback>,
}

impl TransitionConfig {
    /// An empty config that overrides nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the transition name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the callback.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Transition, &State, &State) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Override the callback with one already shared elsewhere.
    pub fn with_shared_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Layer `later` on top of this config. Fields set in `later` win.
    pub fn then(self, later: TransitionConfig) -> Self {
        Self {
            name: later.name.or(self.name),
            callback: later.callback.or(self.callback),
        }
    }

    /// The name override, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The callback override, if set.
    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }
}

impl fmt::Debug for TransitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionConfig")
            .field("name", &self.name)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// A declared rule permitting movement from any of `from` to `to`.
///
/// Transitions are immutable once configured. Validation of the source set
/// is deferred to [`Registry::build`].
///
/// # Example
///
/// ```rust
/// use edgecheck::{State, States, Transition};
///
/// let finish = Transition::new(States::new(["verify"]), "done").with_name("Mark Done");
///
/// assert_eq!(finish.name(), "Mark Done");
/// assert!(finish.transition_from(&State::new("verify")).is_ok());
/// assert!(finish.transition_from(&State::new("todo")).is_err());
/// ```
#[derive(Clone)]
pub struct Transition {
    name: String,
    from: States,
    to: State,
    callback: Option<Callback>,
}

impl Transition {
    /// An unnamed transition with no callback.
    pub fn new(from: impl Into<States>, to: impl Into<State>) -> Self {
        Self {
            name: String::new(),
            from: from.into(),
            to: to.into(),
            callback: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the callback run on every successful dispatch.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Transition, &State, &State) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Apply every field set in `config`, leaving the others untouched.
    pub fn configure(mut self, config: TransitionConfig) -> Self {
        if let Some(name) = config.name {
            self.name = name;
        }
        if let Some(callback) = config.callback {
            self.callback = Some(callback);
        }
        self
    }

    /// Empty when the transition is unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source states.
    pub fn from(&self) -> &States {
        &self.from
    }

    /// Destination state.
    pub fn to(&self) -> &State {
        &self.to
    }

    /// Declared callback, if any.
    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    /// Check this transition alone against one candidate source state.
    ///
    /// # Panics
    ///
    /// Panics if the transition has no source states.
    pub fn transition_from(&self, from: &State) -> Result<(), TransitionError> {
        self.transition_from_with(from, &TransitionConfig::default())
    }

    /// Like [`transition_from`](Self::transition_from) with call-time overrides.
    ///
    /// # Panics
    ///
    /// Panics if the transition has no source states.
    pub fn transition_from_with(
        &self,
        from: &State,
        config: &TransitionConfig,
    ) -> Result<(), TransitionError> {
        Registry::new(vec![self.clone()]).handle_with(from, &self.to, config)
    }
}

/// Every state named by `transitions`, in first-seen order.
///
/// Each transition contributes its sources before its destination.
pub(crate) fn states_of(transitions: &[Transition]) -> States {
    let mut states = UniqueStates::default();
    for transition in transitions {
        for from in transition.from() {
            states.insert(from.clone());
        }
        states.insert(transition.to().clone());
    }
    states.into_states()
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
