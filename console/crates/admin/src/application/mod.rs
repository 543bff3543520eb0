//! Application layer - actions, session context, configuration

pub mod actions;
pub mod config;
pub mod session;
