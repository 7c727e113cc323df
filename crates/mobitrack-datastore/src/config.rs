//! Datastore configuration.

use config::{Config, Environment};
use mobitrack_core::{MobitrackError, MobitrackResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Table names and query tuning for the datastore layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Table holding admin records.
    #[serde(default = "default_admin_table")]
    pub admin_table: String,

    /// Table holding organization records.
    #[serde(default = "default_organization_table")]
    pub organization_table: String,

    /// Page size for list operations.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_admin_table() -> String {
    "admins".to_string()
}

fn default_organization_table() -> String {
    "organizations".to_string()
}

fn default_page_size() -> usize {
    20
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self {
            admin_table: default_admin_table(),
            organization_table: default_organization_table(),
            page_size: default_page_size(),
        }
    }
}

impl DatastoreConfig {
    /// Loads configuration from the environment.
    ///
    /// Variables use the `MOBITRACK_` prefix (`MOBITRACK_ADMIN_TABLE`,
    /// `MOBITRACK_PAGE_SIZE`, …); a `.env` file is honored when present.
    /// Every field has a usable default, so an empty environment is fine.
    pub fn from_env() -> MobitrackResult<Self> {
        if let Err(err) = dotenvy::dotenv() {
            debug!("no .env file loaded: {}", err);
        }

        let source = Config::builder()
            .add_source(
                Environment::with_prefix("MOBITRACK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|err| MobitrackError::configuration(err.to_string()))?;

        source
            .try_deserialize()
            .map_err(|err| MobitrackError::configuration(err.to_string()))
    }
}
