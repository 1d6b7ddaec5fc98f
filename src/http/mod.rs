//! HTTP server module for the catalog backend.
//!
//! Axum-based REST API over the cleaned artifact. Handlers are stateless
//! pass-through reads: each request opens, reads and parses the artifact
//! file independently, so there is no shared mutable state and nothing to
//! lock.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
