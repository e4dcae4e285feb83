//! Route guard
//!
//! Decides, per navigation attempt, whether the guarded view is shown or the
//! user is sent elsewhere. Decisions are a pure function of the session, so
//! evaluating twice against the same snapshot yields the same answer.

use shared::RoleName;

use crate::permissions::Permissions;
use crate::routes;
use crate::session::Session;

/// How a role list is matched against the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleMatch {
    /// At least one listed role
    #[default]
    Any,
    /// Every listed role
    All,
}

/// Access requirement of a guarded route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub roles: Vec<RoleName>,
    pub mode: RoleMatch,
}

impl RouteRequirement {
    /// Authentication only, no role restriction
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn any_of(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            mode: RoleMatch::Any,
        }
    }

    pub fn all_of(roles: impl IntoIterator<Item = RoleName>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
            mode: RoleMatch::All,
        }
    }

    fn is_satisfied_by(&self, permissions: &Permissions<'_>) -> bool {
        if self.roles.is_empty() {
            return true;
        }
        match self.mode {
            RoleMatch::Any => permissions.has_any_role(&self.roles),
            RoleMatch::All => permissions.has_all_roles(&self.roles),
        }
    }
}

/// Outcome of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Admit,
    Redirect {
        target: String,
        /// Originally requested location, kept for post-login return
        from: Option<String>,
    },
}

impl GuardDecision {
    pub fn is_admit(&self) -> bool {
        matches!(self, GuardDecision::Admit)
    }
}

/// Redirect targets
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
    unauthorized_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(routes::LOGIN, routes::UNAUTHORIZED)
    }
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>, unauthorized_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            unauthorized_path: unauthorized_path.into(),
        }
    }

    pub fn evaluate(
        &self,
        session: &Session,
        requested: &str,
        requirement: &RouteRequirement,
    ) -> GuardDecision {
        if !session.is_authenticated() {
            tracing::debug!(requested, "Guard: not authenticated, redirecting to login");
            return GuardDecision::Redirect {
                target: self.login_path.clone(),
                from: Some(requested.to_string()),
            };
        }

        let permissions = Permissions::new(session);
        if !requirement.is_satisfied_by(&permissions) {
            tracing::debug!(requested, roles = ?requirement.roles, "Guard: missing required role");
            return GuardDecision::Redirect {
                target: self.unauthorized_path.clone(),
                from: None,
            };
        }

        GuardDecision::Admit
    }
}
