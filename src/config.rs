//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::db::Database;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Port for the HTTP server (from PORTFOLIO_PORT)
    pub port: Option<u16>,
    /// Preference database path (from PORTFOLIO_DB_PATH)
    pub db_path: Option<PathBuf>,
    /// JSON catalog replacing the built-in projects (from PORTFOLIO_CATALOG)
    pub catalog_path: Option<PathBuf>,
    /// Third-party form endpoint for contact submissions (from PORTFOLIO_FORM_ENDPOINT)
    pub form_endpoint: Option<String>,
}

impl PortfolioConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORTFOLIO_PORT").and_then(|s| match s.trim().parse::<u16>() {
            Ok(port) => Some(port),
            Err(_) => {
                tracing::warn!("Ignoring invalid PORTFOLIO_PORT {:?}", s);
                None
            }
        });

        let non_empty = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        Self {
            port,
            db_path: non_empty("PORTFOLIO_DB_PATH").map(PathBuf::from),
            catalog_path: non_empty("PORTFOLIO_CATALOG").map(PathBuf::from),
            form_endpoint: non_empty("PORTFOLIO_FORM_ENDPOINT"),
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if port.is_some() {
            self.port = port;
        }
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Open and migrate the preference database.
    pub fn open_database(&self) -> Result<Database> {
        let db = match &self.db_path {
            Some(path) => Database::open(path.clone())?,
            None => Database::open_default()?,
        };
        db.migrate()?;
        Ok(db)
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::from_json_file(path)?),
            None => Ok(Catalog::builtin()),
        }
    }
}
