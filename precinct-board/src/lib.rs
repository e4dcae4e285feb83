//! Precinct Board - detective board graph model
//!
//! Typed vertices for cases, suspects and evidence, directed edges between
//! them, the renderer's edit intents, display tables and the persisted
//! board shape. Rendering and saving are left to the caller.

pub mod error;
pub mod graph;
pub mod node;
pub mod persist;
pub mod style;

pub use error::{GraphError, GraphResult};
pub use graph::{BoardEdge, BoardGraph, BoardIntent, LAYOUT_SPACING};
pub use node::{BoardNode, CaseNodeData, EvidenceNodeData, NodeData, NodeId, Position, SuspectNodeData};
pub use persist::{PersistedBoard, Viewport};
pub use style::Badge;
