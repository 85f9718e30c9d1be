//! Network layer: typed API shapes and the HTTP client wrappers.

pub mod api;
pub mod error;
pub mod games;
pub mod types;
