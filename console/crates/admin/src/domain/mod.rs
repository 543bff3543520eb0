//! Domain layer - backend records and the upstream seam

pub mod api;
pub mod entity;
