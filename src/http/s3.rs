use crate::config::AwsConfig;
use crate::debug;
use crate::error::SyncError;
use crate::http::sigv4::{self, CanonicalRequest, SigningKey};
use chrono::Utc;
use reqwest::Client;
use url::Url;

const SERVICE: &str = "s3";

/// Object-storage client. The only operation this system needs is a
/// single PutObject, which fully replaces the object at the key.
pub struct S3Client {
    endpoint: Option<Url>,
    aws: AwsConfig,
    client: Client,
}

impl S3Client {
    pub fn new(aws: &AwsConfig) -> Result<Self, SyncError> {
        let endpoint = match &aws.s3_endpoint {
            Some(raw) => Some(Url::parse(raw).map_err(|e| {
                SyncError::Config(format!("invalid storage endpoint {raw:?}: {e}"))
            })?),
            None => None,
        };

        let client = Client::builder()
            .user_agent(concat!("jira-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            endpoint,
            aws: aws.clone(),
            client,
        })
    }

    // Virtual-hosted-style on the public endpoint; path-style when an
    // override is configured (local stacks expect it).
    fn object_url(&self, bucket: &str, key: &str) -> Result<Url, SyncError> {
        let raw = match &self.endpoint {
            Some(endpoint) => {
                format!("{}/{bucket}/{key}", endpoint.as_str().trim_end_matches('/'))
            }
            None => format!(
                "https://{bucket}.{SERVICE}.{}.amazonaws.com/{key}",
                self.aws.region
            ),
        };
        Url::parse(&raw)
            .map_err(|e| SyncError::Config(format!("invalid object URL {raw:?}: {e}")))
    }

    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: Vec<u8>,
    ) -> Result<(), SyncError> {
        let url = self.object_url(bucket, key)?;
        debug!("PUT {url}");

        let now = Utc::now();
        let payload_hash = sigv4::sha256_hex(&content);

        let mut headers = vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("host".to_string(), sigv4::host_header(&url)),
            ("x-amz-content-sha256".to_string(), payload_hash.clone()),
            ("x-amz-date".to_string(), sigv4::amz_date(now)),
        ];
        if let Some(token) = &self.aws.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }

        let authorization = sigv4::authorization_header(
            &SigningKey {
                access_key_id: &self.aws.access_key_id,
                secret_access_key: &self.aws.secret_access_key,
                region: &self.aws.region,
                service: SERVICE,
            },
            now,
            &CanonicalRequest {
                method: "PUT",
                url: &url,
                headers: &headers,
                payload_hash: &payload_hash,
            },
        );

        let mut request = self
            .client
            .put(url)
            .header("authorization", authorization)
            .body(content);
        for (name, value) in &headers {
            if name != "host" {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(SyncError::Storage {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(())
    }
}
