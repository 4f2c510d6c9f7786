//! # GitHub Environment Secret Store
//!
//! REST implementation of [`EnvironmentSecretStore`] against the GitHub
//! Actions environment secrets API.
//!
//! Every request carries the API version `Accept` header, a bearer token,
//! and a `User-Agent` derived from the repository name. The base URL is a
//! constructor parameter so contract tests can point the client at a mock
//! server.

mod seal;
mod types;

use crate::constants::{
    ENV_GITHUB_REPOSITORY, ENV_GITHUB_REPOSITORY_ID, ENV_GITHUB_TOKEN, GITHUB_API_ACCEPT,
    GITHUB_API_BASE, SECRETS_PAGE_SIZE,
};
use crate::error::SyncError;
use crate::store::{EnvironmentSecretStore, PublicKeyInfo};
use async_trait::async_trait;
use reqwest::{header, Client, Method, StatusCode};
use tracing::debug;
use types::{PutSecretRequest, SecretsListResponse};

/// GitHub REST client scoped to one repository
pub struct GithubEnvStore {
    http_client: Client,
    base_url: String,
    repository_id: String,
    token: String,
    user_agent: String,
}

impl std::fmt::Debug for GithubEnvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubEnvStore")
            .field("base_url", &self.base_url)
            .field("repository_id", &self.repository_id)
            .field("token", &"***")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GithubEnvStore {
    /// Create a client against an explicit base URL
    pub fn new(
        base_url: impl Into<String>,
        repository_id: impl Into<String>,
        token: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, SyncError> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| SyncError::Fetch(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            repository_id: repository_id.into(),
            token: token.into(),
            user_agent: user_agent.into(),
        })
    }

    /// Create a client from the process environment
    ///
    /// Reads the repository slug (for the `User-Agent`), the repository id
    /// and the API token; any missing variable fails the run before the
    /// first request.
    pub fn from_env() -> Result<Self, SyncError> {
        let repository = require_env(ENV_GITHUB_REPOSITORY)?;
        let user_agent = repository
            .split_once('/')
            .map(|(_, name)| name.to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                SyncError::Environment(format!(
                    "{ENV_GITHUB_REPOSITORY} must look like owner/name, got '{repository}'"
                ))
            })?;

        Self::new(
            GITHUB_API_BASE,
            require_env(ENV_GITHUB_REPOSITORY_ID)?,
            require_env(ENV_GITHUB_TOKEN)?,
            user_agent,
        )
    }

    fn secrets_url(&self, environment: &str) -> String {
        format!(
            "{}/repositories/{}/environments/{}/secrets",
            self.base_url, self.repository_id, environment
        )
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header(header::ACCEPT, GITHUB_API_ACCEPT)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::USER_AGENT, &self.user_agent)
    }
}

fn require_env(name: &str) -> Result<String, SyncError> {
    std::env::var(name)
        .map_err(|_| SyncError::Environment(format!("{name} env variable is not set")))
}

#[async_trait]
impl EnvironmentSecretStore for GithubEnvStore {
    async fn list_secret_names(&self, environment: &str) -> Result<Vec<String>, SyncError> {
        let mut names = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!(
                "{}?per_page={}&page={}",
                self.secrets_url(environment),
                SECRETS_PAGE_SIZE,
                page
            );
            debug!("Listing secrets page {page} for environment {environment}");

            let response = self
                .request(Method::GET, &url)
                .send()
                .await
                .map_err(|e| SyncError::Fetch(format!("error while fetching secrets: {e}")))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| {
                SyncError::Fetch(format!("error while reading secrets listing: {e}"))
            })?;

            if status != StatusCode::OK {
                return Err(SyncError::Fetch(format!(
                    "listing secrets returned status {status}: {body}"
                )));
            }

            let listing: SecretsListResponse = serde_json::from_str(&body).map_err(|e| {
                SyncError::Fetch(format!("unexpected secrets listing payload: {e}"))
            })?;

            let page_count = listing.secrets.len();
            names.extend(listing.secrets.into_iter().map(|secret| secret.name));

            // The server reports the total; stop once it is reached. A short
            // page also stops the loop in case the total shrinks mid-listing.
            if names.len() >= listing.total_count || page_count == 0 {
                break;
            }
            page += 1;
        }

        Ok(names)
    }

    async fn get_public_key(&self, environment: &str) -> Result<PublicKeyInfo, SyncError> {
        let url = format!("{}/public-key", self.secrets_url(environment));

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(|e| SyncError::Fetch(format!("error while fetching public key: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SyncError::Fetch(format!("error while reading public key: {e}")))?;

        if status != StatusCode::OK {
            return Err(SyncError::Fetch(format!(
                "fetching public key returned status {status}: {body}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| SyncError::Fetch(format!("unexpected public key payload: {e}")))
    }

    async fn put_secret(
        &self,
        environment: &str,
        name: &str,
        value: &str,
        public_key: &PublicKeyInfo,
    ) -> Result<(), SyncError> {
        let encrypted_value =
            seal::seal_to_base64(value, &public_key.key).map_err(|e| SyncError::Upsert {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        // The endpoint upper-cases names implicitly; do it explicitly so the
        // URL matches what the listing will later return.
        let url = format!("{}/{}", self.secrets_url(environment), name.to_uppercase());

        let response = self
            .request(Method::PUT, &url)
            .json(&PutSecretRequest {
                encrypted_value,
                key_id: public_key.key_id.clone(),
            })
            .send()
            .await
            .map_err(|e| SyncError::Upsert {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::CREATED && status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Upsert {
                name: name.to_string(),
                message: format!("status {status}: {body}"),
            });
        }

        Ok(())
    }

    async fn delete_secret(&self, environment: &str, name: &str) -> Result<(), SyncError> {
        let url = format!("{}/{}", self.secrets_url(environment), name.to_uppercase());

        let response = self
            .request(Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| SyncError::Delete {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Delete {
                name: name.to_string(),
                message: format!("status {status}: {body}"),
            });
        }

        Ok(())
    }
}
