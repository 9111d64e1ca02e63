//! Access tokens for the Sheets API
//!
//! Requests carry a bearer token from a [`TokenProvider`]. The production
//! provider exchanges a Google service-account key for short-lived tokens;
//! [`StaticToken`] serves a pre-issued token.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use std::path::Path;
use yup_oauth2::ServiceAccountAuthenticator;
use yup_oauth2::authenticator::DefaultAuthenticator;

/// Read-only access to spreadsheet contents
pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Source of bearer tokens for API requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// A fixed, already-issued token
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Service-account JWT flow; tokens are cached and refreshed by the authenticator
pub struct ServiceAccountAuth {
    authenticator: DefaultAuthenticator,
    scopes: Vec<String>,
}

impl ServiceAccountAuth {
    /// Load a service-account key file (the JSON downloaded from the Cloud console)
    pub async fn from_key_file(path: &Path) -> Result<Self> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Error reading credential file: {}", path.display()))?;

        Self::from_key_json(&data).await
    }

    pub async fn from_key_json(data: &[u8]) -> Result<Self> {
        let key = yup_oauth2::parse_service_account_key(data)
            .context("Unable to parse credential JSON")?;

        debug!("Loaded service account key for {}", key.client_email);

        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .context("Unable to create Sheets authenticator")?;

        Ok(Self {
            authenticator,
            scopes: vec![SHEETS_READONLY_SCOPE.to_string()],
        })
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountAuth {
    async fn access_token(&self) -> Result<String> {
        let token = self
            .authenticator
            .token(self.scopes.as_slice())
            .await
            .map_err(|e| anyhow!("Unable to obtain access token: {}", e))?;

        token
            .token()
            .map(str::to_owned)
            .context("Token response did not contain an access token")
    }
}
