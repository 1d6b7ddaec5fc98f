//! Read-side access to the cleaned artifact.
//!
//! The server never caches: every call re-reads the artifact from disk, so
//! a rerun of the transform is picked up by the next request with no
//! restart. Candidate paths are resolved once at startup (see
//! [`crate::config`]) and tried in order on each read, mirroring the
//! install-location-then-working-directory fallback the deployment needs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{CleanedRecord, StatsSummary};

/// Failures while reading the artifact. All of these are recovered into an
/// error-shaped HTTP response; none terminates the server.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found (checked: {checked:?})")]
    Missing { checked: Vec<PathBuf> },
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("artifact {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Locates and parses the cleaned artifact.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    candidates: Vec<PathBuf>,
}

impl ArtifactStore {
    /// Build a store over an ordered list of candidate artifact paths.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Convenience constructor for a store with a single known path.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self::new(vec![path.into()])
    }

    /// Whether any candidate currently exists on disk.
    pub fn available(&self) -> bool {
        self.resolve().is_ok()
    }

    /// First candidate that exists on disk.
    fn resolve(&self) -> Result<&Path, ArtifactError> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
            .ok_or_else(|| ArtifactError::Missing {
                checked: self.candidates.clone(),
            })
    }

    /// Read and parse the full artifact, in stored order.
    pub fn load(&self) -> Result<Vec<CleanedRecord>, ArtifactError> {
        let path = self.resolve()?;
        let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Recompute the stats summary from a fresh read of the artifact.
    pub fn stats(&self) -> Result<StatsSummary, ArtifactError> {
        Ok(StatsSummary::from_records(&self.load()?))
    }
}
