//! Display tables for board nodes
//!
//! Values outside the known enumerations are rendered, never rejected:
//! unknown severities and statuses get the neutral color and keep their raw
//! text, unknown evidence types borrow the "other" entry.

use shared::{CrimeSeverity, EvidenceType, SuspectStatus};

use crate::node::NodeData;

/// Color for anything the tables do not know
pub const NEUTRAL_COLOR: &str = "#90a4ae";

/// Accent color and short label of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge<'a> {
    pub color: &'static str,
    pub label: &'a str,
}

pub fn severity_color(severity: &CrimeSeverity) -> &'static str {
    match severity {
        CrimeSeverity::Level3 => "#66bb6a",
        CrimeSeverity::Level2 => "#ffa726",
        CrimeSeverity::Level1 => "#ef5350",
        CrimeSeverity::Critical => "#ce93d8",
        CrimeSeverity::Other(_) => NEUTRAL_COLOR,
    }
}

pub fn severity_badge(severity: &CrimeSeverity) -> Badge<'_> {
    Badge {
        color: severity_color(severity),
        label: severity.as_str(),
    }
}

pub fn suspect_status_badge(status: &SuspectStatus) -> Badge<'_> {
    let (color, label) = match status {
        SuspectStatus::UnderInvestigation => ("#ffa726", "Investigating"),
        SuspectStatus::UnderSevereSurveillance => ("#ef5350", "Severe"),
        SuspectStatus::Arrested => ("#ab47bc", "Arrested"),
        SuspectStatus::Cleared => ("#66bb6a", "Cleared"),
        SuspectStatus::Other(raw) => (NEUTRAL_COLOR, raw.as_str()),
    };
    Badge { color, label }
}

pub fn evidence_type_badge(evidence_type: &EvidenceType) -> Badge<'static> {
    let (color, label) = match evidence_type {
        EvidenceType::WitnessStatement => ("#4fc3f7", "Witness"),
        EvidenceType::Biological => ("#ef9a9a", "Biological"),
        EvidenceType::Vehicle => ("#a5d6a7", "Vehicle"),
        EvidenceType::Identification => ("#ffe082", "ID Doc"),
        EvidenceType::Other | EvidenceType::Unrecognized(_) => ("#ce93d8", "Other"),
    };
    Badge { color, label }
}

/// Badge shown on a node of any kind
pub fn node_badge(data: &NodeData) -> Badge<'_> {
    match data {
        NodeData::Case(case) => severity_badge(&case.severity),
        NodeData::Suspect(suspect) => suspect_status_badge(&suspect.status),
        NodeData::Evidence(evidence) => evidence_type_badge(&evidence.evidence_type),
    }
}
