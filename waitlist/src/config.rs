use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const TABLE_VAR: &str = "WAITLIST_TABLE";

pub const DEFAULT_TABLE: &str = "waitlist";

/// Where the waitlist lives and how to authenticate against it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Public (anon) API key, sent both as `apikey` and bearer token
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: default_table(),
        }
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one can be found.
    pub fn from_env() -> Result<Self> {
        // A missing .env is fine, the variables may come from the shell
        let _ = dotenvy::dotenv();

        let url = std::env::var(URL_VAR).with_context(|| format!("{} is not set", URL_VAR))?;
        let anon_key =
            std::env::var(ANON_KEY_VAR).with_context(|| format!("{} is not set", ANON_KEY_VAR))?;
        let table = std::env::var(TABLE_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(default_table);

        Ok(Self {
            url,
            anon_key,
            table,
        })
    }

    /// Parse configuration baked into the web bundle at build time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse store configuration")
    }

    /// REST endpoint for inserts into the configured table.
    pub fn table_endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.url.trim_end_matches('/'),
            self.table
        )
    }
}
