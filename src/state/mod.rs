//! Shared client-side state.
//!
//! Only the session lives here; catalog data is fetched per page and
//! discarded with it.

pub mod auth;
