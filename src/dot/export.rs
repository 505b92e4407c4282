//! DOT exporter.

use super::ident::{identifier, quoted};
use super::options::ExportOptions;
use crate::core::{states_of, Transition};
use std::fmt;

const INDENT: &str = "    ";

/// Render `transitions` as a DOT digraph with default options.
///
/// One edge per `(from, to)` pair in declaration order, then one node
/// statement per distinct state in first-seen order.
///
/// # Example
///
/// ```rust
/// use edgecheck::{dot, Transition};
///
/// let text = dot::export(&[
///     Transition::new(["todo"], "done").with_name("Finish"),
/// ]);
///
/// assert_eq!(
///     text,
///     "digraph {\n    todo -> done [label = \"Finish\"];\n    todo;\n    done;\n}\n"
/// );
/// ```
pub fn export(transitions: &[Transition]) -> String {
    export_with(transitions, &ExportOptions::default())
}

/// Render `transitions` as a DOT digraph.
pub fn export_with(transitions: &[Transition], options: &ExportOptions) -> String {
    DotDocument {
        transitions,
        options,
    }
    .to_string()
}

struct DotDocument<'a> {
    transitions: &'a [Transition],
    options: &'a ExportOptions,
}

impl fmt::Display for DotDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.options.graph_name {
            Some(name) => writeln!(f, "digraph {} {{", identifier(name))?,
            None => writeln!(f, "digraph {{")?,
        }

        if let Some(rankdir) = self.options.rankdir {
            writeln!(f, "{INDENT}rankdir={};", rankdir.as_str())?;
        }

        for transition in self.transitions {
            let to = identifier(transition.to().as_str());
            for from in transition.from() {
                write!(f, "{INDENT}{} -> {to}", identifier(from.as_str()))?;
                if !transition.name().is_empty() {
                    write!(f, " [label = {}]", quoted(transition.name()))?;
                }
                writeln!(f, ";")?;
            }
        }

        for state in &states_of(self.transitions) {
            writeln!(f, "{INDENT}{};", identifier(state.as_str()))?;
        }

        writeln!(f, "}}")
    }
}
