//! Identity Model

use serde::{Deserialize, Serialize};

use super::role::{Role, RoleName};

/// Authenticated user profile with its role set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default = "super::role::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: String,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Identity {
    /// Minimal identity, mostly useful for fixtures
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: String::new(),
            phone_number: String::new(),
            national_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            is_active: true,
            date_joined: String::new(),
            last_login: None,
            roles: Vec::new(),
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleName>) -> Self {
        self.roles = roles.into_iter().map(Role::from).collect();
        self
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.iter().any(|r| r.kind() == Some(role))
    }

    /// Raw name match, for role names outside [`RoleName`]
    pub fn has_role_named(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Name to show in the UI
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Partial identity update (PATCH body). Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
