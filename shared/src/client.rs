//! Client-related types shared between the identity service and the client
//!
//! Request/response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Identity;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username, email, phone number or national id
    pub identifier: String,
    pub password: String,
}

/// Account registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

/// Login / register response data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Identity,
    pub token: String,
}
