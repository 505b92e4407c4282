//! DOT importer.
//!
//! Parsing is delegated to `graphviz-rust`; this module walks the resulting
//! statements and groups edges by destination. Each destination becomes one
//! [`Transition`] whose sources are every node with an edge into it.

use super::error::ImportError;
use super::ident::unescape;
use crate::builder::BuildError;
use crate::core::{State, States, Transition, UniqueStates};
use crate::registry::Registry;
use graphviz_rust::dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph as DotGraph, GraphAttributes, Id, NodeId, Stmt,
    Vertex,
};
use std::collections::HashMap;
use tracing::debug;

/// States and transitions reconstructed from a DOT graph.
#[derive(Clone, Debug)]
pub struct ImportedGraph {
    /// Graph identifier; `None` for anonymous graphs.
    pub name: Option<String>,
    /// Every node named anywhere in the graph, in first-seen order.
    pub states: States,
    /// One transition per destination, in first-seen order.
    pub transitions: Vec<Transition>,
}

impl ImportedGraph {
    /// Index the imported transitions.
    pub fn into_registry(self) -> Result<Registry, BuildError> {
        Registry::build(self.transitions)
    }
}

/// Parse DOT text into states and transitions.
///
/// Edge `label` attributes become transition names. When several edges into
/// the same destination carry labels, the last one in document order wins.
///
/// # Example
///
/// ```rust
/// use edgecheck::{dot, State};
///
/// let graph = dot::import(r#"digraph G { verify -> done [label = "Mark Done"]; }"#).unwrap();
///
/// assert!(graph.states.has(&State::new("verify")));
/// assert_eq!(graph.transitions[0].name(), "Mark Done");
/// ```
pub fn import(source: &str) -> Result<ImportedGraph, ImportError> {
    let graph = graphviz_rust::parse(source).map_err(ImportError::Parse)?;

    let (id, stmts) = match graph {
        DotGraph::DiGraph { id, stmts, .. } => (id, stmts),
        DotGraph::Graph { .. } => {
            return Err(ImportError::Unsupported(
                "undirected graphs have no transition direction".to_string(),
            ))
        }
    };

    let mut collector = Collector::default();
    collector.visit(&stmts, None)?;

    let imported = collector.finish(graph_name(&id)?);
    debug!(
        states = imported.states.len(),
        transitions = imported.transitions.len(),
        "imported DOT graph"
    );
    Ok(imported)
}

struct Target {
    to: State,
    from: UniqueStates,
    label: Option<String>,
}

#[derive(Default)]
struct Collector {
    states: UniqueStates,
    targets: Vec<Target>,
    by_destination: HashMap<State, usize>,
}

impl Collector {
    fn visit(&mut self, stmts: &[Stmt], inherited_label: Option<&str>) -> Result<(), ImportError> {
        let mut default_label = inherited_label.map(str::to_string);

        for stmt in stmts {
            match stmt {
                Stmt::Node(node) => {
                    let state = node_state(&node.id)?;
                    self.states.insert(state);
                }
                Stmt::Edge(edge) => self.visit_edge(edge, default_label.as_deref())?,
                Stmt::GAttribute(GraphAttributes::Edge(attrs)) => {
                    if let Some(label) = label_of(attrs)? {
                        default_label = Some(label);
                    }
                }
                Stmt::Subgraph(subgraph) => {
                    self.visit(&subgraph.stmts, default_label.as_deref())?;
                }
                Stmt::GAttribute(_) | Stmt::Attribute(_) => {}
            }
        }

        Ok(())
    }

    fn visit_edge(&mut self, edge: &DotEdge, default_label: Option<&str>) -> Result<(), ImportError> {
        let vertices = match &edge.ty {
            EdgeTy::Pair(from, to) => vec![vertex_state(from)?, vertex_state(to)?],
            EdgeTy::Chain(chain) => chain
                .iter()
                .map(vertex_state)
                .collect::<Result<Vec<_>, _>>()?,
        };

        let label = match label_of(&edge.attributes)? {
            Some(label) => Some(label),
            None => default_label.map(str::to_string),
        };

        for pair in vertices.windows(2) {
            self.add_edge(pair[0].clone(), pair[1].clone(), label.clone());
        }

        Ok(())
    }

    fn add_edge(&mut self, from: State, to: State, label: Option<String>) {
        self.states.insert(from.clone());
        self.states.insert(to.clone());

        let index = match self.by_destination.get(&to) {
            Some(&index) => index,
            None => {
                self.targets.push(Target {
                    to: to.clone(),
                    from: UniqueStates::default(),
                    label: None,
                });
                self.by_destination.insert(to, self.targets.len() - 1);
                self.targets.len() - 1
            }
        };

        let target = &mut self.targets[index];
        target.from.insert(from);
        if label.is_some() {
            target.label = label;
        }
    }

    fn finish(self, name: Option<String>) -> ImportedGraph {
        let transitions = self
            .targets
            .into_iter()
            .map(|target| {
                let transition = Transition::new(target.from.into_states(), target.to);
                match target.label {
                    Some(label) => transition.with_name(label),
                    None => transition,
                }
            })
            .collect();

        ImportedGraph {
            name,
            states: self.states.into_states(),
            transitions,
        }
    }
}

fn graph_name(id: &Id) -> Result<Option<String>, ImportError> {
    match id {
        Id::Anonymous(_) => Ok(None),
        other => id_to_string(other).map(Some),
    }
}

fn vertex_state(vertex: &Vertex) -> Result<State, ImportError> {
    match vertex {
        Vertex::N(node_id) => node_state(node_id),
        Vertex::S(_) => Err(ImportError::Unsupported(
            "subgraphs cannot be edge endpoints".to_string(),
        )),
    }
}

// Ports are layout hints; only the node name identifies a state.
fn node_state(node_id: &NodeId) -> Result<State, ImportError> {
    id_to_string(&node_id.0).map(State::new)
}

fn label_of(attrs: &[Attribute]) -> Result<Option<String>, ImportError> {
    let mut label = None;
    for Attribute(key, value) in attrs {
        if id_to_string(key)? == "label" {
            label = Some(id_to_string(value)?);
        }
    }
    Ok(label)
}

fn id_to_string(id: &Id) -> Result<String, ImportError> {
    match id {
        Id::Plain(value) | Id::Html(value) | Id::Anonymous(value) => Ok(value.clone()),
        Id::Escaped(value) => value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .map(unescape)
            .ok_or_else(|| {
                ImportError::Parse(format!("escaped string id '{value}' is missing quotes"))
            }),
    }
}
