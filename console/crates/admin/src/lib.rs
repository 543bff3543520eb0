//! Admin Console Module
//!
//! Clean Architecture structure:
//! - `domain/` - Typed backend records and the [`domain::api::UpstreamApi`] seam
//! - `application/` - Actions, session context, configuration
//! - `infra/` - HTTP implementation of the upstream seam
//! - `presentation/` - Handlers, DTOs, router, route-guard middleware
//!
//! ## Features
//! - Translator management (list/create/toggle-status/delete)
//! - Series and chapter administration (list/delete/premium-toggle/content)
//! - Announcement management (CRUD + active-toggle)
//! - Dashboard statistics and recent-purchase feeds
//! - Session login/logout with single-cookie relay
//!
//! ## Session Model
//! - The backend issues an opaque token in an httpOnly cookie
//! - Every navigation is re-validated against the remote profile endpoint;
//!   no locally decoded token is ever trusted
//! - Actions forward the caller's cookie header verbatim

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::ConsoleConfig;
pub use application::session::SessionContext;
pub use domain::api::UpstreamApi;
pub use infra::http::HttpUpstreamApi;
pub use presentation::router::console_router;

// Re-export the shared action contract for unified result handling
pub use shared::action::{
    error::{ActionError, ActionResult},
    reply::ActionReply,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod actions {
    pub use crate::application::actions::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
