//! Catalog Transform Binary
//!
//! One-time offline pass over the raw catalog export. Reads the raw CSV,
//! cleans every row, and writes the JSON artifact the server reads.
//!
//! # Usage
//!
//! ```bash
//! # Default paths (relative to the working directory)
//! cargo run --bin catalog-transform
//!
//! # Explicit paths
//! cargo run --bin catalog-transform -- data/raw/catalog_titles.csv data/processed/catalog_cleaned.json
//! ```

use std::env;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use catalog_rust::config::{ARTIFACT_RELATIVE_PATH, RAW_RELATIVE_PATH};
use catalog_rust::transform;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let mut args = env::args().skip(1);
    let raw_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(RAW_RELATIVE_PATH));
    let artifact_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(ARTIFACT_RELATIVE_PATH));

    info!(raw = %raw_path.display(), "starting data processing");

    let rows = transform::run(&raw_path, &artifact_path)?;

    info!(
        rows,
        artifact = %artifact_path.display(),
        "cleaned data saved"
    );

    Ok(())
}
