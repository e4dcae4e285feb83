//! Persisted board shape
//!
//! The document the renderer saves and restores:
//! `{ "nodes": [...], "edges": [...], "viewport": { "x", "y", "zoom" } }`.
//! Restoring goes through the graph's own edit checks, so a document that
//! breaks an invariant is refused as a whole.

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::graph::{BoardEdge, BoardGraph};
use crate::node::BoardNode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedBoard {
    #[serde(default)]
    pub nodes: Vec<BoardNode>,
    #[serde(default)]
    pub edges: Vec<BoardEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl PersistedBoard {
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl BoardGraph {
    /// Snapshot for saving. Selection is not persisted.
    pub fn to_persisted(&self, viewport: Option<Viewport>) -> PersistedBoard {
        PersistedBoard {
            nodes: self.nodes().to_vec(),
            edges: self.edges().to_vec(),
            viewport,
        }
    }

    /// Rebuild a board from a saved document. The result starts clean.
    pub fn from_persisted(board: PersistedBoard) -> GraphResult<Self> {
        let mut graph = BoardGraph::new();
        for node in board.nodes {
            graph.add_node(node)?;
        }
        for edge in board.edges {
            graph.insert_edge(edge)?;
        }
        graph.mark_clean();
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::node::NodeId;

    const SAVED: &str = r#"{
        "nodes": [
            {"id": "case-1", "type": "case", "position": {"x": 0, "y": 0},
             "data": {"caseId": 1, "title": "Silver Blaze", "severity": "Level 2", "status": "Open"}},
            {"id": "evidence-4", "type": "evidence", "position": {"x": 260, "y": 520},
             "data": {"evidenceId": 4, "title": "Curried mutton", "evidenceType": "biological",
                      "description": "", "recordedBy": "holmes", "createdDate": "2024-03-01"}}
        ],
        "edges": [
            {"id": "reactflow__edge-case-1-evidence-4", "source": "case-1", "target": "evidence-4"}
        ],
        "viewport": {"x": 12.5, "y": -40, "zoom": 0.8}
    }"#;

    #[test]
    fn test_restore_saved_board() {
        let saved = PersistedBoard::from_json(SAVED).unwrap();
        assert_eq!(saved.viewport.map(|v| v.zoom), Some(0.8));

        let graph = BoardGraph::from_persisted(saved.clone()).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_dirty());
        assert!(graph.edge("reactflow__edge-case-1-evidence-4").is_some());

        assert_eq!(graph.to_persisted(saved.viewport), saved);
    }

    #[test]
    fn test_empty_document() {
        let graph = BoardGraph::from_persisted(PersistedBoard::from_json("{}").unwrap()).unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_dangling_edge_is_refused() {
        let mut saved = PersistedBoard::from_json(SAVED).unwrap();
        saved.edges.push(BoardEdge::new(NodeId::case(1), NodeId::suspect(3)));
        let err = BoardGraph::from_persisted(saved).unwrap_err();
        assert!(matches!(err, GraphError::MissingEndpoint(id) if id == NodeId::suspect(3)));
    }
}
