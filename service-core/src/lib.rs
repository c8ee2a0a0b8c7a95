//! service-core: Shared infrastructure for the company registry workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
