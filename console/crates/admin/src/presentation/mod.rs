//! Presentation layer - DTOs, handlers, router, route-guard middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
