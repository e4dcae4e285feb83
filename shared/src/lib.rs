//! Shared types for the precinct client
//!
//! Identity, role and case-file records plus the auth DTOs used by both
//! the client core and the detective board.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, RegisterRequest};
pub use models::{
    CaseRecord, CrimeSeverity, EvidenceRecord, EvidenceType, Identity, IdentityUpdate, Role,
    RoleName, SuspectRecord, SuspectStatus,
};
