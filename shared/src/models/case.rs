//! Case Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crime severity of a case.
///
/// Values outside the four known levels are kept verbatim in `Other` so that
/// upstream drift never fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CrimeSeverity {
    /// Minor crimes (petty theft, small fraud)
    Level3,
    /// Major crimes (vehicle theft)
    Level2,
    /// Severe crimes (murder)
    Level1,
    /// Terrorism, serial murder, assassination
    Critical,
    Other(String),
}

impl CrimeSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            CrimeSeverity::Level3 => "Level 3",
            CrimeSeverity::Level2 => "Level 2",
            CrimeSeverity::Level1 => "Level 1",
            CrimeSeverity::Critical => "Critical",
            CrimeSeverity::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CrimeSeverity::Other(_))
    }
}

impl From<&str> for CrimeSeverity {
    fn from(value: &str) -> Self {
        match value {
            "Level 3" => CrimeSeverity::Level3,
            "Level 2" => CrimeSeverity::Level2,
            "Level 1" => CrimeSeverity::Level1,
            "Critical" => CrimeSeverity::Critical,
            other => CrimeSeverity::Other(other.to_string()),
        }
    }
}

impl From<String> for CrimeSeverity {
    fn from(value: String) -> Self {
        CrimeSeverity::from(value.as_str())
    }
}

impl From<CrimeSeverity> for String {
    fn from(value: CrimeSeverity) -> Self {
        match value {
            CrimeSeverity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CrimeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case record as consumed by the detective board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: i64,
    pub title: String,
    pub severity: CrimeSeverity,
    /// Free-form workflow status (Pending, Open, Under Investigation, ...)
    pub status: String,
}
