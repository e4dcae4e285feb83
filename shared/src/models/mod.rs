//! Data models
//!
//! Shared between the client core and the detective board (via API).
//! All IDs are `i64`, matching the identity and case services.

pub mod case;
pub mod evidence;
pub mod role;
pub mod suspect;
pub mod user;

// Re-exports
pub use case::*;
pub use evidence::*;
pub use role::*;
pub use suspect::*;
pub use user::*;
