//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of console vocabulary:
//! - The action-layer result contract ([`action::error::ActionError`])
//! - The UI-facing reply envelope ([`action::reply::ActionReply`])
//!
//! **Design Principle**: every action exposed to the console UI resolves to
//! the same two-armed shape, `{success: true, data}` or
//! `{success: false, error}`, so callers branch on a flag and never catch.

pub mod action {
    pub mod error;
    pub mod reply;
}
