//! Suspect Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Investigation status of a suspect. Unknown values are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuspectStatus {
    UnderInvestigation,
    UnderSevereSurveillance,
    Arrested,
    Cleared,
    Other(String),
}

impl SuspectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SuspectStatus::UnderInvestigation => "Under Investigation",
            SuspectStatus::UnderSevereSurveillance => "Under Severe Surveillance",
            SuspectStatus::Arrested => "Arrested",
            SuspectStatus::Cleared => "Cleared",
            SuspectStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for SuspectStatus {
    fn from(value: &str) -> Self {
        match value {
            "Under Investigation" => SuspectStatus::UnderInvestigation,
            "Under Severe Surveillance" => SuspectStatus::UnderSevereSurveillance,
            "Arrested" => SuspectStatus::Arrested,
            "Cleared" => SuspectStatus::Cleared,
            other => SuspectStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for SuspectStatus {
    fn from(value: String) -> Self {
        SuspectStatus::from(value.as_str())
    }
}

impl From<SuspectStatus> for String {
    fn from(value: SuspectStatus) -> Self {
        match value {
            SuspectStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SuspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suspect record as consumed by the detective board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspectRecord {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub status: SuspectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_under_investigation: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspect_record_parses_without_days() {
        let json = r#"{"id": 9, "name": "Moriarty", "national_id": "0012345678", "status": "Under Severe Surveillance"}"#;
        let record: SuspectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, SuspectStatus::UnderSevereSurveillance);
        assert_eq!(record.days_under_investigation, None);
    }

    #[test]
    fn test_unknown_status_keeps_raw_text() {
        let status = SuspectStatus::from("Fled");
        assert_eq!(status.as_str(), "Fled");
        assert_eq!(String::from(status), "Fled");
    }
}
