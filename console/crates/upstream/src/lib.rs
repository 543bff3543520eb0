//! Upstream Crate - backend API plumbing
//!
//! This crate provides the shared technical foundations for talking to the
//! platform backend:
//! - Envelope-normalizing HTTP client ([`client::UpstreamClient`])
//! - Wire envelope and normalized result types ([`envelope`])
//! - Set-Cookie parsing and the session-cookie relay ([`cookie`])
//!
//! Every backend response, success or failure, arrives wrapped in
//! `{"success": true, "data": <T>}` or
//! `{"success": false, "error": {"message", "statusCode"?}}`. The client
//! strips that wrapper and always hands callers a typed
//! [`envelope::ApiResult`]; it never panics and never surfaces a raw
//! transport error.

pub mod client;
pub mod cookie;
pub mod envelope;

pub use client::{HeaderBag, Method, RequestBody, UpstreamClient, UpstreamRequest};
pub use envelope::{ApiError, ApiResult};
