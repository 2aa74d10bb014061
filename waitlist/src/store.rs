use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// A single entry on the waitlist
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WaitlistRecord {
    pub email: String,
}

impl WaitlistRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Remote collection the form writes into.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded local executor.
#[allow(async_fn_in_trait)]
pub trait WaitlistStore {
    /// Insert exactly one record. No retries.
    async fn insert(&self, record: &WaitlistRecord) -> Result<(), StoreError>;
}

/// Supabase (PostgREST) client for the waitlist table
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl WaitlistStore for SupabaseStore {
    async fn insert(&self, record: &WaitlistRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.config.table_endpoint())
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StoreError::from_response(status.as_u16(), &body))
    }
}
