//! Edge keys for the registry index.

use super::state::State;
use std::fmt;

/// One `(from, to)` pair, the atomic unit of validity lookup.
///
/// Renders as `(from,to)` using the raw labels.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeKey {
    pub from: State,
    pub to: State,
}

impl EdgeKey {
    /// Key for the `from -> to` edge.
    pub fn new(from: impl Into<State>, to: impl Into<State>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from.as_str(), self.to.as_str())
    }
}
