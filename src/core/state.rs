//! State labels and source-state sets.
//!
//! A [`State`] is an opaque label compared by exact string identity. Its
//! `Display` form capitalizes the first character and exists purely for
//! diagnostics; lookups never see it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single point in the machine's state space.
///
/// # Example
///
/// ```rust
/// use edgecheck::State;
///
/// let todo = State::new("todo");
/// assert_eq!(todo.as_str(), "todo");
/// assert_eq!(todo.to_string(), "Todo");
/// assert_ne!(todo, State::new("Todo"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Wrap a label verbatim. Any label is legal, including the empty string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw label used for equality and lookup.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => {
                for upper in first.to_uppercase() {
                    write!(f, "{upper}")?;
                }
                f.write_str(chars.as_str())
            }
            None => Ok(()),
        }
    }
}

impl From<&str> for State {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for State {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

/// Ordered set of source states for a transition.
///
/// Order is insertion order and only matters for deterministic iteration.
/// Repeated members are allowed.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct States(Vec<State>);

impl States {
    /// Collect `states` in the given order, keeping repeats.
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        states.into_iter().map(Into::into).collect()
    }

    /// Check membership by exact label identity.
    ///
    /// ```rust
    /// use edgecheck::{State, States};
    ///
    /// let states = States::new(["todo", "done"]);
    /// assert!(states.has(&State::new("done")));
    /// assert!(!states.has(&State::new("Done")));
    /// ```
    pub fn has(&self, state: &State) -> bool {
        self.0.iter().any(|s| s == state)
    }

    /// Labels in lexicographic order.
    pub fn sorted_strings(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.0.iter().map(|s| s.0.clone()).collect();
        labels.sort();
        labels
    }

    /// Members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.0.iter()
    }

    /// Number of members, repeats included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First-seen ordered collection of distinct states.
///
/// Membership is checked through a hash index so collecting a large table
/// stays linear.
#[derive(Default)]
pub(crate) struct UniqueStates {
    states: Vec<State>,
    seen: HashSet<State>,
}

impl UniqueStates {
    pub(crate) fn insert(&mut self, state: State) {
        if self.seen.insert(state.clone()) {
            self.states.push(state);
        }
    }

    pub(crate) fn into_states(self) -> States {
        States(self.states)
    }
}

impl FromIterator<State> for States {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for States {
    type Item = State;
    type IntoIter = std::vec::IntoIter<State>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a States {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<State>> for States {
    fn from(states: Vec<State>) -> Self {
        Self(states)
    }
}

impl From<State> for States {
    fn from(state: State) -> Self {
        Self(vec![state])
    }
}

impl<const N: usize> From<[&str; N]> for States {
    fn from(labels: [&str; N]) -> Self {
        Self::new(labels)
    }
}

impl<const N: usize> From<[State; N]> for States {
    fn from(states: [State; N]) -> Self {
        Self(states.into())
    }
}
