//! Server configuration, resolved once at startup and injected.
//!
//! Nothing here is read again after construction: path fallbacks, origin
//! lists and the port are all fixed before the router is built, never
//! computed ad hoc per request.

use std::env;
use std::path::PathBuf;

/// Local development frontend.
pub const DEV_ORIGIN: &str = "http://localhost:3000";
/// Deployed production frontend.
pub const PROD_ORIGIN: &str = "https://catalog-strategy-dashboard.vercel.app";

/// Artifact location relative to the install root.
pub const ARTIFACT_RELATIVE_PATH: &str = "data/processed/catalog_cleaned.json";
/// Raw export location relative to the install root.
pub const RAW_RELATIVE_PATH: &str = "data/raw/catalog_titles.csv";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("a wildcard origin cannot be combined with allow_credentials")]
    WildcardWithCredentials,
}

/// Everything the HTTP server needs, bundled at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Exact origins allowed by CORS, or a single `"*"` for a wildcard.
    pub allowed_origins: Vec<String>,
    /// Whether CORS responses allow credentials. Mutually exclusive with a
    /// wildcard origin under browser security rules.
    pub allow_credentials: bool,
    /// Candidate artifact paths, tried in order on every read.
    pub artifact_candidates: Vec<PathBuf>,
}

impl ServerConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::WildcardWithCredentials`] when a `"*"` origin
    /// is combined with `allow_credentials = true`.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        allowed_origins: Vec<String>,
        allow_credentials: bool,
        artifact_candidates: Vec<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if allow_credentials && allowed_origins.iter().any(|o| o == "*") {
            return Err(ConfigError::WildcardWithCredentials);
        }
        Ok(Self {
            host: host.into(),
            port,
            allowed_origins,
            allow_credentials,
            artifact_candidates,
        })
    }

    /// Build the deployment configuration from the environment.
    ///
    /// # Environment Variables
    /// - `HOST`: bind host (default: 0.0.0.0)
    /// - `PORT`: bind port (default: 8000)
    /// - `CATALOG_DATA_DIR`: overrides the install-location base for the
    ///   artifact path
    ///
    /// The allowed-origin list is a compile-time constant (the development
    /// and production frontends), not runtime-configurable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Self::new(
            host,
            port,
            vec![DEV_ORIGIN.to_string(), PROD_ORIGIN.to_string()],
            true,
            artifact_candidates(),
        )
    }
}

/// Resolve the artifact candidate paths once, at startup.
///
/// Order of preference: an explicit `CATALOG_DATA_DIR`, then the directory
/// of the running executable (the install location; the working directory
/// varies by deployment environment), then the working directory as a last
/// resort.
fn artifact_candidates() -> Vec<PathBuf> {
    let mut bases = Vec::new();
    if let Ok(dir) = env::var("CATALOG_DATA_DIR") {
        bases.push(PathBuf::from(dir));
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            bases.push(dir.to_path_buf());
        }
    }
    bases.push(PathBuf::from("."));
    bases
        .into_iter()
        .map(|base| base.join(ARTIFACT_RELATIVE_PATH))
        .collect()
}
