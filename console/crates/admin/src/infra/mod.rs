//! Infrastructure layer - HTTP implementation of the upstream seam

pub mod http;
