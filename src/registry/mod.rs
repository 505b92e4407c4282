//! Transition registry and dispatch.
//!
//! A [`Registry`] indexes every `(from, to)` edge of a transition table once,
//! at construction, and then answers dispatch calls with a single lookup.
//! Authoring mistakes (empty source sets, the same edge claimed by two
//! transitions) are rejected while building, never at dispatch time.

mod error;

pub use error::TransitionError;

use crate::builder::{BuildError, RegistryBuilder};
use crate::core::{states_of, Callback, EdgeKey, State, States, Transition, TransitionConfig};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Read-only index from edges to the transitions that own them.
///
/// # Example
///
/// ```rust
/// use edgecheck::{Registry, State, Transition};
///
/// let registry = Registry::build(vec![
///     Transition::new(["red"], "green"),
///     Transition::new(["green"], "yellow"),
///     Transition::new(["yellow"], "red"),
/// ])
/// .unwrap();
///
/// let err = registry
///     .handle(&State::new("green"), &State::new("red"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), r#""Green" -> "Red" is not a valid transition"#);
/// assert!(registry.handle(&State::new("green"), &State::new("yellow")).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    transitions: Vec<Transition>,
    edges: HashMap<EdgeKey, usize>,
}

impl Registry {
    /// Index every edge of `transitions`.
    ///
    /// Fails on the first transition with no source states and on the first
    /// edge already claimed by a different transition. A source repeated
    /// within one transition is indexed once.
    pub fn build(transitions: Vec<Transition>) -> Result<Self, BuildError> {
        let mut edges = HashMap::new();

        for (index, transition) in transitions.iter().enumerate() {
            if transition.from().is_empty() {
                return Err(BuildError::EmptySources {
                    to: transition.to().clone(),
                });
            }

            for from in transition.from() {
                let key = EdgeKey::new(from, transition.to());
                match edges.get(&key) {
                    Some(&owner) if owner == index => {}
                    Some(_) => return Err(BuildError::DuplicateEdge { key }),
                    None => {
                        edges.insert(key, index);
                    }
                }
            }
        }

        debug!(
            transitions = transitions.len(),
            edges = edges.len(),
            "built transition registry"
        );

        Ok(Self { transitions, edges })
    }

    /// Build the registry, treating an invalid table as a fatal error.
    ///
    /// # Panics
    ///
    /// Panics with the [`BuildError`] message if the table is invalid.
    pub fn new(transitions: Vec<Transition>) -> Self {
        match Self::build(transitions) {
            Ok(registry) => registry,
            Err(err) => panic!("invalid transition table: {err}"),
        }
    }

    /// Start a [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Validate `from -> to` and run the matched transition's callback.
    pub fn handle(&self, from: &State, to: &State) -> Result<(), TransitionError> {
        self.handle_with(from, to, &TransitionConfig::default())
    }

    /// Validate `from -> to` and run the resolved callback.
    ///
    /// The callback in `config` wins over the one declared on the transition;
    /// with neither, the call succeeds without side effects. The callback's
    /// error is returned as [`TransitionError::Callback`].
    pub fn handle_with(
        &self,
        from: &State,
        to: &State,
        config: &TransitionConfig,
    ) -> Result<(), TransitionError> {
        let Some(transition) = self.get(from, to) else {
            debug!(from = from.as_str(), to = to.as_str(), "rejected transition");
            return Err(TransitionError::Invalid {
                from: from.clone(),
                to: to.clone(),
            });
        };

        trace!(
            from = from.as_str(),
            to = to.as_str(),
            name = transition.name(),
            "dispatching transition"
        );

        match resolve_callback(transition, config) {
            Some(callback) => callback(transition, from, to).map_err(TransitionError::Callback),
            None => Ok(()),
        }
    }

    /// True when some transition owns the `(from, to)` edge.
    pub fn is_valid(&self, from: &State, to: &State) -> bool {
        self.get(from, to).is_some()
    }

    /// The transition owning the `(from, to)` edge.
    pub fn get(&self, from: &State, to: &State) -> Option<&Transition> {
        let key = EdgeKey::new(from, to);
        self.edges.get(&key).map(|&index| &self.transitions[index])
    }

    /// The table in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of distinct indexed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every state mentioned by the table, in first-seen order.
    pub fn states(&self) -> States {
        states_of(&self.transitions)
    }
}

fn resolve_callback<'a>(
    transition: &'a Transition,
    config: &'a TransitionConfig,
) -> Option<&'a Callback> {
    config.callback().or_else(|| transition.callback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn s(label: &str) -> State {
        State::new(label)
    }

    fn kanban() -> Vec<Transition> {
        vec![
            Transition::new(["todo", "in progress", "verify"], "todo"),
            Transition::new(["todo", "in progress", "verify"], "in progress"),
            Transition::new(["in progress", "verify"], "verify"),
            Transition::new(["verify"], "done"),
        ]
    }

    #[test]
    fn kanban_transitions_validate() {
        let registry = Registry::new(kanban());
        let cases = [
            ("todo", "in progress", true),
            ("in progress", "todo", true),
            ("verify", "done", true),
            ("verify", "verify", true),
            ("todo", "done", false),
            ("done", "verify", false),
            ("done", "done", false),
            ("todo", "foo", false),
        ];

        for (from, to, valid) in cases {
            let result = registry.handle(&s(from), &s(to));
            assert_eq!(result.is_ok(), valid, "({from},{to})");
        }
    }

    #[test]
    fn invalid_transition_message_capitalizes_for_display_only() {
        let registry = Registry::new(vec![Transition::new(["green"], "yellow")]);

        let err = registry.handle(&s("green"), &s("red")).unwrap_err();
        assert!(err.is_invalid());
        assert_eq!(err.to_string(), r#""Green" -> "Red" is not a valid transition"#);

        let err = registry.handle(&s("Green"), &s("yellow")).unwrap_err();
        assert!(err.is_invalid());
    }

    #[test]
    fn duplicate_edge_across_transitions_fails_build() {
        let result = Registry::build(vec![
            Transition::new(["a", "b"], "c"),
            Transition::new(["b"], "c"),
        ]);

        match result {
            Err(BuildError::DuplicateEdge { key }) => assert_eq!(key, EdgeKey::new("b", "c")),
            other => panic!("expected duplicate edge, got {other:?}"),
        }
    }

    #[test]
    fn repeated_source_within_one_transition_is_indexed_once() {
        let registry = Registry::build(vec![Transition::new(["a", "a"], "b")]).unwrap();

        assert_eq!(registry.edge_count(), 1);
        assert!(registry.is_valid(&s("a"), &s("b")));
    }

    #[test]
    fn empty_sources_fail_build() {
        let result = Registry::build(vec![
            Transition::new(["a"], "b"),
            Transition::new(States::default(), "c"),
        ]);

        assert!(matches!(result, Err(BuildError::EmptySources { to }) if to == s("c")));
    }

    #[test]
    #[should_panic(expected = "(a,b) is a duplicate transition")]
    fn new_panics_on_duplicate_edge() {
        Registry::new(vec![Transition::new(["a"], "b"), Transition::new(["a"], "b")]);
    }

    #[test]
    fn self_loops_dispatch_normally() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let registry = Registry::new(vec![Transition::new(["idle"], "idle").with_callback(
            move |_, from, to| {
                assert_eq!(from, to);
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        )]);

        registry.handle(&s("idle"), &s("idle")).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn callback_precedence_is_call_then_declared_then_noop() {
        let last = Arc::new(AtomicUsize::new(0));
        let declared = Arc::clone(&last);
        let overriding = Arc::clone(&last);

        let registry = Registry::new(vec![
            Transition::new(["a"], "b").with_callback(move |_, _, _| {
                declared.store(1, Ordering::SeqCst);
                Ok(())
            }),
            Transition::new(["b"], "c"),
        ]);
        let call = TransitionConfig::new().with_callback(move |_, _, _| {
            overriding.store(2, Ordering::SeqCst);
            Ok(())
        });

        registry.handle(&s("a"), &s("b")).unwrap();
        assert_eq!(last.load(Ordering::SeqCst), 1);

        registry.handle_with(&s("a"), &s("b"), &call).unwrap();
        assert_eq!(last.load(Ordering::SeqCst), 2);

        registry.handle_with(&s("b"), &s("c"), &call).unwrap();
        assert!(registry.handle(&s("b"), &s("c")).is_ok());
    }

    #[test]
    fn callback_not_invoked_for_invalid_edge() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let registry = Registry::new(vec![Transition::new(["a"], "b")]);
        let call = TransitionConfig::new().with_callback(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(registry.handle_with(&s("b"), &s("a"), &call).is_err());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn callback_error_is_returned_unchanged() {
        #[derive(Debug, thiserror::Error, PartialEq)]
        #[error("door is locked")]
        struct Locked;

        let registry = Registry::new(vec![
            Transition::new(["closed"], "open").with_callback(|_, _, _| Err(Locked.into()))
        ]);

        let err = registry.handle(&s("closed"), &s("open")).unwrap_err();
        assert_eq!(err.to_string(), "door is locked");

        let inner = err.into_callback_error().expect("callback error");
        assert_eq!(inner.downcast_ref::<Locked>(), Some(&Locked));
    }

    #[test]
    fn states_lists_every_label_once() {
        let registry = Registry::new(kanban());

        assert_eq!(
            registry.states(),
            States::new(["todo", "in progress", "verify", "done"])
        );
        assert_eq!(registry.edge_count(), 9);
        assert_eq!(registry.transitions().len(), 4);
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
