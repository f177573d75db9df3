use crate::error::SyncError;
use std::env;
use url::Url;

/// Process configuration, read once at startup and passed by parameter.
#[derive(Debug, Clone)]
pub struct Config {
    pub jira_domain: String,
    pub jql_query: String,
    pub secret_name: String,
    pub bucket_name: String,
    /// Optional override for the tracker base URL (local stacks, tests).
    /// When unset the endpoint is `https://{jira_domain}`.
    pub jira_endpoint: Option<String>,
    pub aws: AwsConfig,
}

/// Standard AWS client environment, as provided by the hosting
/// execution environment.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
    pub secrets_endpoint: Option<String>,
    pub s3_endpoint: Option<String>,
}

fn required(name: &str) -> Result<String, SyncError> {
    env::var(name).map_err(|_| SyncError::Config(format!("missing environment variable {name}")))
}

impl Config {
    pub fn from_env() -> Result<Self, SyncError> {
        Ok(Self {
            jira_domain: required("JIRA_DOMAIN")?,
            jql_query: required("JQL_QUERY")?,
            secret_name: required("API_TOKEN_SECRET_NAME")?,
            bucket_name: required("BUCKET_NAME")?,
            jira_endpoint: env::var("JIRA_ENDPOINT_URL").ok(),
            aws: AwsConfig::from_env()?,
        })
    }

    pub fn jira_base_url(&self) -> Result<Url, SyncError> {
        let raw = match &self.jira_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}", self.jira_domain),
        };
        Url::parse(&raw)
            .map_err(|e| SyncError::Config(format!("invalid tracker endpoint {raw:?}: {e}")))
    }
}

impl AwsConfig {
    pub fn from_env() -> Result<Self, SyncError> {
        Ok(Self {
            access_key_id: required("AWS_ACCESS_KEY_ID")?,
            secret_access_key: required("AWS_SECRET_ACCESS_KEY")?,
            session_token: env::var("AWS_SESSION_TOKEN").ok(),
            region: required("AWS_REGION")?,
            secrets_endpoint: env::var("AWS_ENDPOINT_URL_SECRETS_MANAGER").ok(),
            s3_endpoint: env::var("AWS_ENDPOINT_URL_S3").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const REQUIRED_VARS: &[(&str, &str)] = &[
        ("JIRA_DOMAIN", "example.atlassian.net"),
        ("JQL_QUERY", "project=ABC"),
        ("API_TOKEN_SECRET_NAME", "jira/api-token"),
        ("BUCKET_NAME", "sync-bucket"),
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "test-secret"),
        ("AWS_REGION", "us-east-1"),
    ];

    fn set_full_env() {
        for (name, value) in REQUIRED_VARS {
            unsafe { env::set_var(name, value) };
        }
        for name in [
            "AWS_SESSION_TOKEN",
            "AWS_ENDPOINT_URL_SECRETS_MANAGER",
            "AWS_ENDPOINT_URL_S3",
            "JIRA_ENDPOINT_URL",
        ] {
            unsafe { env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_from_env_complete() {
        set_full_env();

        let config = Config::from_env().expect("complete environment");
        assert_eq!(config.jira_domain, "example.atlassian.net");
        assert_eq!(config.jql_query, "project=ABC");
        assert_eq!(config.secret_name, "jira/api-token");
        assert_eq!(config.bucket_name, "sync-bucket");
        assert_eq!(config.aws.region, "us-east-1");
        assert!(config.aws.session_token.is_none());
        assert!(config.aws.secrets_endpoint.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_required_var() {
        for (missing, _) in REQUIRED_VARS {
            set_full_env();
            unsafe { env::remove_var(missing) };

            let result = Config::from_env();
            let err = result.err().expect("expected missing-var failure");
            match err {
                SyncError::Config(msg) => assert!(msg.contains(missing), "message names {missing}"),
                other => panic!("expected Config error, got: {other}"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_jira_base_url_from_domain() {
        set_full_env();

        let config = Config::from_env().expect("complete environment");
        let url = config.jira_base_url().expect("valid domain");
        assert_eq!(url.as_str(), "https://example.atlassian.net/");
    }

    #[test]
    #[serial]
    fn test_jira_base_url_endpoint_override() {
        set_full_env();
        unsafe { env::set_var("JIRA_ENDPOINT_URL", "http://127.0.0.1:9000") };

        let config = Config::from_env().expect("complete environment");
        let url = config.jira_base_url().expect("valid override");
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/");

        unsafe { env::remove_var("JIRA_ENDPOINT_URL") };
    }
}
