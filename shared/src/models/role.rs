//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational role (RBAC 角色)
///
/// Reference data attached to an [`Identity`](super::Identity). The raw `name`
/// is kept exactly as the identity service sent it; use [`Role::kind`] to
/// resolve it into a [`RoleName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

pub(crate) fn default_true() -> bool {
    true
}

impl Role {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            is_active: true,
        }
    }

    /// Resolve the raw role name. Unknown names resolve to `None`.
    pub fn kind(&self) -> Option<RoleName> {
        RoleName::parse(&self.name)
    }
}

impl From<RoleName> for Role {
    fn from(name: RoleName) -> Self {
        Self::new(0, name.as_str())
    }
}

/// The fixed set of organizational roles known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "System Administrator")]
    SystemAdministrator,
    #[serde(rename = "Police Chief")]
    PoliceChief,
    #[serde(rename = "Captain")]
    Captain,
    #[serde(rename = "Sergeant")]
    Sergeant,
    #[serde(rename = "Detective")]
    Detective,
    #[serde(rename = "Police Officer")]
    PoliceOfficer,
    #[serde(rename = "Patrol Officer")]
    PatrolOfficer,
    #[serde(rename = "Intern (Cadet)")]
    Intern,
    #[serde(rename = "Forensic Doctor")]
    ForensicDoctor,
    #[serde(rename = "Judge")]
    Judge,
    #[serde(rename = "Complainant")]
    Complainant,
    #[serde(rename = "Witness")]
    Witness,
    #[serde(rename = "Suspect")]
    Suspect,
    #[serde(rename = "Criminal")]
    Criminal,
    #[serde(rename = "Basic User")]
    BasicUser,
}

impl RoleName {
    pub const ALL: [RoleName; 15] = [
        RoleName::SystemAdministrator,
        RoleName::PoliceChief,
        RoleName::Captain,
        RoleName::Sergeant,
        RoleName::Detective,
        RoleName::PoliceOfficer,
        RoleName::PatrolOfficer,
        RoleName::Intern,
        RoleName::ForensicDoctor,
        RoleName::Judge,
        RoleName::Complainant,
        RoleName::Witness,
        RoleName::Suspect,
        RoleName::Criminal,
        RoleName::BasicUser,
    ];

    /// Display name as used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::SystemAdministrator => "System Administrator",
            RoleName::PoliceChief => "Police Chief",
            RoleName::Captain => "Captain",
            RoleName::Sergeant => "Sergeant",
            RoleName::Detective => "Detective",
            RoleName::PoliceOfficer => "Police Officer",
            RoleName::PatrolOfficer => "Patrol Officer",
            RoleName::Intern => "Intern (Cadet)",
            RoleName::ForensicDoctor => "Forensic Doctor",
            RoleName::Judge => "Judge",
            RoleName::Complainant => "Complainant",
            RoleName::Witness => "Witness",
            RoleName::Suspect => "Suspect",
            RoleName::Criminal => "Criminal",
            RoleName::BasicUser => "Basic User",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_role() {
        for role in RoleName::ALL {
            assert_eq!(RoleName::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_name_has_no_kind() {
        let role = Role::new(7, "Janitor");
        assert_eq!(role.kind(), None);
        assert_eq!(Role::new(1, "detective").kind(), None);
    }

    #[test]
    fn test_role_deserializes_with_defaults() {
        let role: Role = serde_json::from_str(r#"{"id": 3, "name": "Intern (Cadet)"}"#).unwrap();
        assert_eq!(role.kind(), Some(RoleName::Intern));
        assert!(role.is_active);
        assert!(role.description.is_empty());
    }

    #[test]
    fn test_role_name_serializes_display_string() {
        let json = serde_json::to_string(&RoleName::ForensicDoctor).unwrap();
        assert_eq!(json, r#""Forensic Doctor""#);
    }
}
