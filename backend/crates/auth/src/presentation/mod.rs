//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the access-guard middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGuard, AuthUser, require_auth};
pub use router::{auth_router, auth_router_generic};
