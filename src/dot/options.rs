//! Exporter configuration.

use serde::{Deserialize, Serialize};

/// Layout direction hint emitted as a top-level `rankdir` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "BT")]
    BottomToTop,
    #[serde(rename = "RL")]
    RightToLeft,
}

impl RankDir {
    /// The DOT attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::LeftToRight => "LR",
            Self::BottomToTop => "BT",
            Self::RightToLeft => "RL",
        }
    }
}

/// Cosmetic settings for [`export_with`](super::export_with).
///
/// Neither field affects what the importer reconstructs.
///
/// # Example
///
/// ```rust
/// use edgecheck::dot::{ExportOptions, RankDir};
///
/// let options = ExportOptions::from_json(r#"{ "graph_name": "kanban", "rankdir": "LR" }"#).unwrap();
/// assert_eq!(options, ExportOptions::new().with_graph_name("kanban").with_rankdir(RankDir::LeftToRight));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Emitted as `digraph NAME {`; anonymous when absent.
    pub graph_name: Option<String>,
    pub rankdir: Option<RankDir>,
}

impl ExportOptions {
    /// Anonymous graph, default layout direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the exported graph.
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    /// Set the layout direction.
    pub fn with_rankdir(mut self, rankdir: RankDir) -> Self {
        self.rankdir = Some(rankdir);
        self
    }

    /// Load options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options = ExportOptions::from_json("{}").unwrap();
        assert_eq!(options, ExportOptions::default());

        let options = ExportOptions::from_json(r#"{ "rankdir": "BT" }"#).unwrap();
        assert_eq!(options.rankdir, Some(RankDir::BottomToTop));
        assert_eq!(options.graph_name, None);
    }

    #[test]
    fn unknown_rankdir_is_rejected() {
        assert!(ExportOptions::from_json(r#"{ "rankdir": "sideways" }"#).is_err());
    }

    #[test]
    fn rankdir_serializes_as_dot_keyword() {
        let json = serde_json::to_string(&RankDir::RightToLeft).unwrap();
        assert_eq!(json, "\"RL\"");
        assert_eq!(RankDir::LeftToRight.as_str(), "LR");
    }
}
