//! Board vertices
//!
//! Serialized in the renderer's node shape:
//! `{ "id", "type": "case" | "suspect" | "evidence", "position", "data" }`
//! with camelCase data fields.

use serde::{Deserialize, Serialize};
use shared::{CaseRecord, CrimeSeverity, EvidenceRecord, EvidenceType, SuspectRecord, SuspectStatus};
use std::fmt;

/// Vertex identifier, unique within a board
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn case(case_id: i64) -> Self {
        Self(format!("case-{case_id}"))
    }

    pub fn suspect(suspect_id: i64) -> Self {
        Self(format!("suspect-{suspect_id}"))
    }

    pub fn evidence(evidence_id: i64) -> Self {
        Self(format!("evidence-{evidence_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNodeData {
    pub case_id: i64,
    pub title: String,
    pub severity: CrimeSeverity,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspectNodeData {
    pub suspect_id: i64,
    pub name: String,
    pub national_id: String,
    pub status: SuspectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_under_investigation: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceNodeData {
    pub evidence_id: i64,
    pub title: String,
    pub evidence_type: EvidenceType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recorded_by: String,
    #[serde(default)]
    pub created_date: String,
}

impl From<&CaseRecord> for CaseNodeData {
    fn from(record: &CaseRecord) -> Self {
        Self {
            case_id: record.id,
            title: record.title.clone(),
            severity: record.severity.clone(),
            status: record.status.clone(),
        }
    }
}

impl From<&SuspectRecord> for SuspectNodeData {
    fn from(record: &SuspectRecord) -> Self {
        Self {
            suspect_id: record.id,
            name: record.name.clone(),
            national_id: record.national_id.clone(),
            status: record.status.clone(),
            days_under_investigation: record.days_under_investigation,
        }
    }
}

impl From<&EvidenceRecord> for EvidenceNodeData {
    fn from(record: &EvidenceRecord) -> Self {
        Self {
            evidence_id: record.id,
            title: record.title.clone(),
            evidence_type: record.evidence_type.clone(),
            description: record.description.clone(),
            recorded_by: record.recorded_by.clone(),
            created_date: record.created_date.clone(),
        }
    }
}

/// Vertex payload, tagged by vertex kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeData {
    Case(CaseNodeData),
    Suspect(SuspectNodeData),
    Evidence(EvidenceNodeData),
}

impl NodeData {
    /// Id derived from the underlying record
    pub fn derived_id(&self) -> NodeId {
        match self {
            NodeData::Case(data) => NodeId::case(data.case_id),
            NodeData::Suspect(data) => NodeId::suspect(data.suspect_id),
            NodeData::Evidence(data) => NodeId::evidence(data.evidence_id),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NodeData::Case(_) => "case",
            NodeData::Suspect(_) => "suspect",
            NodeData::Evidence(_) => "evidence",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NodeData::Case(data) => &data.title,
            NodeData::Suspect(data) => &data.name,
            NodeData::Evidence(data) => &data.title,
        }
    }
}

/// A vertex on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardNode {
    pub id: NodeId,
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl BoardNode {
    /// Node with the id derived from its record
    pub fn new(data: NodeData, position: Position) -> Self {
        Self {
            id: data.derived_id(),
            data,
            position,
        }
    }

    pub fn case(record: &CaseRecord, position: Position) -> Self {
        Self::new(NodeData::Case(record.into()), position)
    }

    pub fn suspect(record: &SuspectRecord, position: Position) -> Self {
        Self::new(NodeData::Suspect(record.into()), position)
    }

    pub fn evidence(record: &EvidenceRecord, position: Position) -> Self {
        Self::new(NodeData::Evidence(record.into()), position)
    }
}
