//! Evidence Model

use serde::{Deserialize, Serialize};

/// Kind of evidence item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EvidenceType {
    WitnessStatement,
    Biological,
    Vehicle,
    Identification,
    Other,
    /// A type the client does not know about
    Unrecognized(String),
}

impl EvidenceType {
    pub fn as_str(&self) -> &str {
        match self {
            EvidenceType::WitnessStatement => "witness_statement",
            EvidenceType::Biological => "biological",
            EvidenceType::Vehicle => "vehicle",
            EvidenceType::Identification => "identification",
            EvidenceType::Other => "other",
            EvidenceType::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for EvidenceType {
    fn from(value: &str) -> Self {
        match value {
            "witness_statement" => EvidenceType::WitnessStatement,
            "biological" => EvidenceType::Biological,
            "vehicle" => EvidenceType::Vehicle,
            "identification" => EvidenceType::Identification,
            "other" => EvidenceType::Other,
            raw => EvidenceType::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for EvidenceType {
    fn from(value: String) -> Self {
        EvidenceType::from(value.as_str())
    }
}

impl From<EvidenceType> for String {
    fn from(value: EvidenceType) -> Self {
        match value {
            EvidenceType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Evidence record as consumed by the detective board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub id: i64,
    pub title: String,
    pub evidence_type: EvidenceType,
    #[serde(default)]
    pub description: String,
    /// Display name of whoever recorded the item
    #[serde(default)]
    pub recorded_by: String,
    #[serde(default)]
    pub created_date: String,
}
