//! Conversion between transition tables and the DOT graph language.
//!
//! The exporter is a pure function of the in-memory table; the importer
//! parses DOT with `graphviz-rust` and regroups edges by destination.
//! `import(&export(t))` reproduces the states, the `(from, to)` edges and
//! the names of `t`, though not its grouping of sources into transitions.
//!
//! # Example
//!
//! ```rust
//! use edgecheck::{dot, Transition};
//!
//! let table = vec![
//!     Transition::new(["todo", "verify"], "todo"),
//!     Transition::new(["verify"], "done").with_name("Mark Done"),
//! ];
//!
//! let graph = dot::import(&dot::export(&table)).unwrap();
//! assert_eq!(graph.states.len(), 3);
//! assert_eq!(graph.transitions[1].name(), "Mark Done");
//! ```

mod error;
mod export;
mod ident;
mod import;
mod options;

pub use error::ImportError;
pub use export::{export, export_with};
pub use import::{import, ImportedGraph};
pub use options::{ExportOptions, RankDir};
