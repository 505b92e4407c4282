//! Macros for ergonomic transition tables.

/// Build a [`States`](crate::States) set from labels or states.
///
/// # Example
///
/// ```
/// use edgecheck::{states, State};
///
/// let sources = states!["todo", "in progress", "verify"];
/// assert!(sources.has(&State::new("verify")));
/// assert!(states![].is_empty());
/// ```
#[macro_export]
macro_rules! states {
    () => {
        $crate::States::default()
    };
    ($($state:expr),+ $(,)?) => {
        $crate::States::new([$($state),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    #[test]
    fn states_macro_keeps_order() {
        let sources = states!["b", "a"];
        let labels: Vec<&str> = sources.iter().map(State::as_str).collect();

        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn states_macro_accepts_state_values() {
        let sources = states![State::new("x"), State::new("y"),];

        assert_eq!(sources.len(), 2);
        assert!(sources.has(&State::new("y")));
    }
}
