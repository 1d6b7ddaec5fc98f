//! # Catalog Rust Backend
//!
//! Backend for a small streaming-catalog dashboard. It has two halves,
//! used independently:
//!
//! - **Transform**: a one-time offline pass that reads the raw catalog CSV
//!   export, normalizes missing metadata, derives calendar fields from the
//!   added-date, and writes a cleaned JSON artifact to disk.
//! - **HTTP API**: an axum-based REST server that reads the artifact per
//!   request and serves it (or a small aggregate over it) to the React
//!   frontend.
//!
//! The artifact file is the only interface between the two: the transform
//! writes `data/processed/catalog_cleaned.json`, the server reads it.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Raw and cleaned record types plus the stats summary
//! - [`transform`]: The CSV-to-artifact cleaning pipeline
//! - [`store`]: Read-side access to the artifact with path fallbacks
//! - [`config`]: Server configuration resolved once at startup
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod http;
pub mod models;
pub mod store;
pub mod transform;
