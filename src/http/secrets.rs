use crate::config::AwsConfig;
use crate::debug;
use crate::error::SyncError;
use crate::http::sigv4::{self, CanonicalRequest, SigningKey};
use crate::schemas::secret::{ApiCredentials, GetSecretValueRequest, GetSecretValueResponse};
use chrono::Utc;
use reqwest::Client;
use url::Url;

const SERVICE: &str = "secretsmanager";
const TARGET_GET_SECRET_VALUE: &str = "secretsmanager.GetSecretValue";
const AWS_JSON: &str = "application/x-amz-json-1.1";

/// Read-only client for the managed secret store, speaking the
/// aws-json-1.1 target protocol.
pub struct SecretsClient {
    endpoint: Url,
    aws: AwsConfig,
    client: Client,
}

impl SecretsClient {
    pub fn new(aws: &AwsConfig) -> Result<Self, SyncError> {
        let raw = match &aws.secrets_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{SERVICE}.{}.amazonaws.com", aws.region),
        };
        let endpoint = Url::parse(&raw)
            .map_err(|e| SyncError::Config(format!("invalid secret store endpoint {raw:?}: {e}")))?;

        let client = Client::builder()
            .user_agent(concat!("jira-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint,
            aws: aws.clone(),
            client,
        })
    }

    /// Fetch the secret and parse its string payload as a credential
    /// bundle. Every failure mode here is the same fault kind: a
    /// missing secret, a binary-only payload, and a malformed bundle
    /// are indistinguishable to the caller.
    pub async fn get_secret_value(&self, secret_name: &str) -> Result<ApiCredentials, SyncError> {
        debug!("GetSecretValue {secret_name} via {}", self.endpoint);

        let body = serde_json::to_vec(&GetSecretValueRequest {
            secret_id: secret_name.to_string(),
        })?;
        let now = Utc::now();

        let mut headers = vec![
            ("content-type".to_string(), AWS_JSON.to_string()),
            ("host".to_string(), sigv4::host_header(&self.endpoint)),
            ("x-amz-date".to_string(), sigv4::amz_date(now)),
            ("x-amz-target".to_string(), TARGET_GET_SECRET_VALUE.to_string()),
        ];
        if let Some(token) = &self.aws.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }

        let payload_hash = sigv4::sha256_hex(&body);
        let authorization = sigv4::authorization_header(
            &SigningKey {
                access_key_id: &self.aws.access_key_id,
                secret_access_key: &self.aws.secret_access_key,
                region: &self.aws.region,
                service: SERVICE,
            },
            now,
            &CanonicalRequest {
                method: "POST",
                url: &self.endpoint,
                headers: &headers,
                payload_hash: &payload_hash,
            },
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header("authorization", authorization)
            .body(body);
        for (name, value) in &headers {
            // reqwest derives Host from the URL itself.
            if name != "host" {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(SyncError::Secret(format!(
                "GetSecretValue returned {status}: {detail}"
            )));
        }

        let reply = response
            .json::<GetSecretValueResponse>()
            .await
            .map_err(|e| SyncError::Secret(format!("unreadable GetSecretValue reply: {e}")))?;

        let Some(payload) = reply.secret_string else {
            return Err(SyncError::Secret("secret has no string payload".to_string()));
        };

        serde_json::from_str::<ApiCredentials>(&payload)
            .map_err(|e| SyncError::Secret(format!("secret payload is not a credential bundle: {e}")))
    }
}
