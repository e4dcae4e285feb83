//! Permission Definitions
//!
//! Capabilities are derived from role membership only. The mapping from
//! roles to capabilities lives in [`Capability::required_roles`] and nowhere
//! else.

use shared::{Identity, RoleName};

use crate::session::Session;

/// Named capability derived from role membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    CreateCase,
    ReviewComplaint,
    ManageEvidence,
    UseDetectiveBoard,
    /// Public page, granted even without a session
    ViewMostWanted,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::CreateCase,
        Capability::ReviewComplaint,
        Capability::ManageEvidence,
        Capability::UseDetectiveBoard,
        Capability::ViewMostWanted,
    ];

    /// Roles granting this capability, any one suffices. `None` means public.
    pub fn required_roles(self) -> Option<&'static [RoleName]> {
        match self {
            Capability::CreateCase => Some(OFFICER_ROLES),
            Capability::ReviewComplaint => Some(COMPLAINT_REVIEW_ROLES),
            Capability::ManageEvidence => Some(EVIDENCE_ROLES),
            Capability::UseDetectiveBoard => Some(DETECTIVE_BOARD_ROLES),
            Capability::ViewMostWanted => None,
        }
    }

    pub fn is_public(self) -> bool {
        self.required_roles().is_none()
    }
}

/// Roles counted as "officer"
const OFFICER_ROLES: &[RoleName] = &[
    RoleName::PoliceOfficer,
    RoleName::PatrolOfficer,
    RoleName::PoliceChief,
];

/// Roles counted as "investigator"
const INVESTIGATOR_ROLES: &[RoleName] = &[RoleName::Detective, RoleName::Sergeant];

const COMPLAINT_REVIEW_ROLES: &[RoleName] = &[RoleName::Intern, RoleName::PoliceOfficer];

const EVIDENCE_ROLES: &[RoleName] = &[
    RoleName::Detective,
    RoleName::Sergeant,
    RoleName::PoliceOfficer,
];

const DETECTIVE_BOARD_ROLES: &[RoleName] = &[RoleName::Detective];

/// Permission checks over one session snapshot
///
/// Holds no state of its own; build a fresh one from the current
/// [`Session`] whenever a decision is needed.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    identity: Option<&'a Identity>,
}

impl<'a> Permissions<'a> {
    /// An unauthenticated session grants nothing but public capabilities,
    /// even if it still carries an identity.
    pub fn new(session: &'a Session) -> Self {
        Self {
            identity: session.identity().filter(|_| session.is_authenticated()),
        }
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.identity.is_some_and(|user| user.has_role(role))
    }

    pub fn has_any_role(&self, roles: &[RoleName]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    /// Every listed role is held. An empty list is vacuously true for a
    /// present identity.
    pub fn has_all_roles(&self, roles: &[RoleName]) -> bool {
        self.identity.is_some() && roles.iter().all(|role| self.has_role(*role))
    }

    pub fn can(&self, capability: Capability) -> bool {
        match capability.required_roles() {
            None => true,
            Some(roles) => self.has_any_role(roles),
        }
    }

    /// Capabilities currently granted
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.can(*capability))
            .collect()
    }

    // ========== Role predicates ==========

    pub fn is_system_administrator(&self) -> bool {
        self.has_role(RoleName::SystemAdministrator)
    }

    pub fn is_police_chief(&self) -> bool {
        self.has_role(RoleName::PoliceChief)
    }

    pub fn is_captain(&self) -> bool {
        self.has_role(RoleName::Captain)
    }

    pub fn is_sergeant(&self) -> bool {
        self.has_role(RoleName::Sergeant)
    }

    pub fn is_detective(&self) -> bool {
        self.has_role(RoleName::Detective)
    }

    pub fn is_police_officer(&self) -> bool {
        self.has_role(RoleName::PoliceOfficer)
    }

    pub fn is_patrol_officer(&self) -> bool {
        self.has_role(RoleName::PatrolOfficer)
    }

    pub fn is_intern(&self) -> bool {
        self.has_role(RoleName::Intern)
    }

    pub fn is_forensic_doctor(&self) -> bool {
        self.has_role(RoleName::ForensicDoctor)
    }

    pub fn is_judge(&self) -> bool {
        self.has_role(RoleName::Judge)
    }

    pub fn is_basic_user(&self) -> bool {
        self.has_role(RoleName::BasicUser)
    }

    pub fn is_officer(&self) -> bool {
        self.has_any_role(OFFICER_ROLES)
    }

    pub fn is_investigator(&self) -> bool {
        self.has_any_role(INVESTIGATOR_ROLES)
    }

    // ========== Capabilities ==========

    pub fn can_create_case(&self) -> bool {
        self.can(Capability::CreateCase)
    }

    pub fn can_review_complaint(&self) -> bool {
        self.can(Capability::ReviewComplaint)
    }

    pub fn can_manage_evidence(&self) -> bool {
        self.can(Capability::ManageEvidence)
    }

    pub fn can_use_detective_board(&self) -> bool {
        self.can(Capability::UseDetectiveBoard)
    }

    pub fn can_view_most_wanted(&self) -> bool {
        self.can(Capability::ViewMostWanted)
    }
}
