//! Precinct Client - session and access control for the precinct service
//!
//! Signs users in against the identity service, keeps the resulting session
//! in a shared store (persisted across restarts), and answers role-based
//! access questions for the UI: capability checks and route guarding.

pub mod config;
pub mod dates;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod http;
pub mod logger;
pub mod permissions;
pub mod routes;
pub mod session;
pub mod storage;
pub mod validation;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::AuthGateway;
pub use guard::{GuardDecision, RoleMatch, RouteGuard, RouteRequirement};
pub use http::{IdentityService, NetworkIdentityService};
pub use permissions::{Capability, Permissions};
pub use session::{Session, SessionStore, SessionWatcher};
pub use storage::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, StorageError, StoredCredential,
};

// Re-export shared types for convenience
pub use shared::{Identity, IdentityUpdate, LoginResponse, RegisterRequest, Role, RoleName};
