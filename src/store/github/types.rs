//! Wire structs for the GitHub environment secrets API.

use serde::{Deserialize, Serialize};

/// Response of `GET .../environments/{env}/secrets`
#[derive(Debug, Deserialize)]
pub(crate) struct SecretsListResponse {
    pub total_count: usize,
    pub secrets: Vec<ListedSecret>,
}

/// One entry of the secrets listing; only the name is of interest
#[derive(Debug, Deserialize)]
pub(crate) struct ListedSecret {
    pub name: String,
}

/// Body of `PUT .../environments/{env}/secrets/{NAME}`
#[derive(Debug, Serialize)]
pub(crate) struct PutSecretRequest {
    pub encrypted_value: String,
    pub key_id: String,
}
