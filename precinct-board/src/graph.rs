//! Board graph
//!
//! Owned by the board view: built when an investigator opens the board,
//! edited through [`BoardIntent`]s coming from the renderer, dropped when
//! the view closes. Saving is the caller's job; the dirty flag says when
//! one is due.
//!
//! Invariants, held after every successful edit and untouched by every
//! rejected one:
//! - node ids are unique
//! - every edge's source and target are nodes on the board
//! - at most one edge per (source, target) pair

use serde::{Deserialize, Serialize};
use shared::{CaseRecord, EvidenceRecord, SuspectRecord};

use crate::error::{GraphError, GraphResult};
use crate::node::{BoardNode, NodeId, Position};

/// Distance between neighbouring nodes of the default layout
pub const LAYOUT_SPACING: f64 = 260.0;

/// Directed edge. Carries nothing beyond its endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEdge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
}

impl BoardEdge {
    /// Edge with the conventional `e-<source>-<target>` id
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: Self::id_for(&source, &target),
            source,
            target,
        }
    }

    pub fn id_for(source: &NodeId, target: &NodeId) -> String {
        format!("e-{source}-{target}")
    }

    pub fn touches(&self, node: &NodeId) -> bool {
        self.source == *node || self.target == *node
    }
}

/// Edit coming from the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum BoardIntent {
    /// Node dragged to a new position
    Move { id: NodeId, position: Position },
    /// New edge drawn between two nodes
    Connect { source: NodeId, target: NodeId },
    /// Selection changed; `None` clears it
    Select(Option<NodeId>),
    /// Node deleted, with its edges
    Remove(NodeId),
    /// Edge deleted
    Disconnect(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardGraph {
    nodes: Vec<BoardNode>,
    edges: Vec<BoardEdge>,
    selected: Option<NodeId>,
    dirty: bool,
}

impl BoardGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from case-file records and declared relationships.
    ///
    /// Cases go in the first row, suspects in the second, evidence in the
    /// third. A relationship naming a node that is not on the board fails
    /// the whole build. The result starts clean.
    pub fn from_records(
        cases: &[CaseRecord],
        suspects: &[SuspectRecord],
        evidence: &[EvidenceRecord],
        relationships: &[(NodeId, NodeId)],
    ) -> GraphResult<Self> {
        let mut graph = Self::new();

        for (col, record) in cases.iter().enumerate() {
            graph.add_node(BoardNode::case(record, grid_position(0, col)))?;
        }
        for (col, record) in suspects.iter().enumerate() {
            graph.add_node(BoardNode::suspect(record, grid_position(1, col)))?;
        }
        for (col, record) in evidence.iter().enumerate() {
            graph.add_node(BoardNode::evidence(record, grid_position(2, col)))?;
        }
        for (source, target) in relationships {
            graph.add_edge(source.clone(), target.clone())?;
        }

        graph.dirty = false;
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Board built from records"
        );
        Ok(graph)
    }

    // ========== Queries ==========

    pub fn nodes(&self) -> &[BoardNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[BoardEdge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&BoardNode> {
        self.nodes.iter().find(|node| node.id == *id)
    }

    pub fn edge(&self, id: &str) -> Option<&BoardEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with `id` as source or target
    pub fn edges_of<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a BoardEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.touches(id))
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// Unsaved changes since construction or the last [`BoardGraph::mark_clean`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    // ========== Edits ==========

    /// Add a node. Ids must be unique; a record already on the board is
    /// rejected.
    pub fn add_node(&mut self, node: BoardNode) -> GraphResult<NodeId> {
        if self.contains_node(&node.id) {
            tracing::debug!(id = %node.id, "Rejected duplicate node");
            return Err(GraphError::DuplicateNode(node.id));
        }
        let id = node.id.clone();
        self.nodes.push(node);
        self.dirty = true;
        Ok(id)
    }

    pub fn add_case(&mut self, record: &CaseRecord, position: Position) -> GraphResult<NodeId> {
        self.add_node(BoardNode::case(record, position))
    }

    pub fn add_suspect(
        &mut self,
        record: &SuspectRecord,
        position: Position,
    ) -> GraphResult<NodeId> {
        self.add_node(BoardNode::suspect(record, position))
    }

    pub fn add_evidence(
        &mut self,
        record: &EvidenceRecord,
        position: Position,
    ) -> GraphResult<NodeId> {
        self.add_node(BoardNode::evidence(record, position))
    }

    /// Remove a node and every edge incident to it
    pub fn remove_node(&mut self, id: &NodeId) -> GraphResult<BoardNode> {
        let index = self
            .nodes
            .iter()
            .position(|node| node.id == *id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;

        let node = self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.dirty = true;

        tracing::debug!(id = %id, edges_removed = before - self.edges.len(), "Node removed");
        Ok(node)
    }

    /// Connect two nodes on the board
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> GraphResult<String> {
        self.insert_edge(BoardEdge::new(source, target))
    }

    /// Insert an edge with a caller-chosen id
    pub fn insert_edge(&mut self, edge: BoardEdge) -> GraphResult<String> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.contains_node(endpoint) {
                tracing::debug!(edge = %edge.id, missing = %endpoint, "Rejected edge");
                return Err(GraphError::MissingEndpoint(endpoint.clone()));
            }
        }
        let duplicate = self.edges.iter().any(|existing| {
            existing.id == edge.id
                || (existing.source == edge.source && existing.target == edge.target)
        });
        if duplicate {
            tracing::debug!(edge = %edge.id, "Rejected duplicate edge");
            return Err(GraphError::DuplicateEdge(edge.id));
        }

        let id = edge.id.clone();
        self.edges.push(edge);
        self.dirty = true;
        Ok(id)
    }

    pub fn remove_edge(&mut self, id: &str) -> GraphResult<BoardEdge> {
        let index = self
            .edges
            .iter()
            .position(|edge| edge.id == id)
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_string()))?;
        self.dirty = true;
        Ok(self.edges.remove(index))
    }

    /// Reposition a node. Shape is unaffected.
    pub fn move_node(&mut self, id: &NodeId, position: Position) -> GraphResult<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == *id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;
        if node.position != position {
            node.position = position;
            self.dirty = true;
        }
        Ok(())
    }

    /// Select a node, or clear the selection. Does not dirty the board.
    pub fn select(&mut self, id: Option<NodeId>) -> GraphResult<()> {
        if let Some(id) = &id
            && !self.contains_node(id)
        {
            return Err(GraphError::NodeNotFound(id.clone()));
        }
        self.selected = id;
        Ok(())
    }

    /// Apply a renderer intent
    pub fn apply(&mut self, intent: BoardIntent) -> GraphResult<()> {
        match intent {
            BoardIntent::Move { id, position } => self.move_node(&id, position),
            BoardIntent::Connect { source, target } => self.add_edge(source, target).map(|_| ()),
            BoardIntent::Select(id) => self.select(id),
            BoardIntent::Remove(id) => self.remove_node(&id).map(|_| ()),
            BoardIntent::Disconnect(id) => self.remove_edge(&id).map(|_| ()),
        }
    }

    /// Empty the board
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selected = None;
        self.dirty = false;
    }
}

fn grid_position(row: usize, col: usize) -> Position {
    Position::new(col as f64 * LAYOUT_SPACING, row as f64 * LAYOUT_SPACING)
}
