use crate::config::Config;
use crate::error::SyncError;
use crate::http::jira::JiraClient;
use crate::http::s3::S3Client;
use crate::http::secrets::SecretsClient;
use crate::schemas::Response;
use crate::{error, info};

/// Fixed destination key; each successful run fully overwrites it.
pub const OBJECT_KEY: &str = "jira-sync.json";

/// One invocation: resolve credentials, search, publish. Exactly two
/// terminal states; fault detail stays in the logs and never reaches
/// the invoker.
pub async fn run(config: &Config) -> Response {
    match sync(config).await {
        Ok(count) => {
            info!(
                "sync complete: {count} issues written to {}/{OBJECT_KEY}",
                config.bucket_name
            );
            Response { status_code: 200 }
        }
        Err(e) => {
            error!("sync failed: {e}");
            Response { status_code: 500 }
        }
    }
}

async fn sync(config: &Config) -> Result<usize, SyncError> {
    let secrets = SecretsClient::new(&config.aws)?;
    let credentials = secrets.get_secret_value(&config.secret_name).await?;

    let jira = JiraClient::new(config.jira_base_url()?)?;
    let search = jira.search(&config.jql_query, &credentials).await?;

    let content = serde_json::to_vec(&search.issues)?;
    let storage = S3Client::new(&config.aws)?;
    storage
        .put_object(&config.bucket_name, OBJECT_KEY, content)
        .await?;

    Ok(search.issues.len())
}
