use serde::{Deserialize, Serialize};

/// Credential bundle stored in the secret's JSON string payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCredentials {
    pub user: String,
    pub api_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSecretValueRequest {
    pub secret_id: String,
}

/// Reply from the secret store. The value arrives either as a string
/// payload or a binary payload; only the string form is supported.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSecretValueResponse {
    #[serde(default)]
    pub secret_string: Option<String>,
    #[serde(default)]
    pub secret_binary: Option<String>,
}
