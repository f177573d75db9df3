use crate::debug;
use crate::error::SyncError;
use crate::schemas::search::{SearchRequest, SearchResponse};
use crate::schemas::secret::ApiCredentials;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

/// Client for the tracker's search endpoint. One authenticated POST
/// per invocation, first page only.
pub struct JiraClient {
    search_url: Url,
    client: Client,
}

impl JiraClient {
    pub fn new(base_url: Url) -> Result<Self, SyncError> {
        let mut search_url = base_url;
        search_url
            .path_segments_mut()
            .map_err(|_| SyncError::Config("tracker URL cannot be a base for paths".to_string()))?
            .pop_if_empty()
            .extend(["rest", "api", "3", "search"]);

        let client = Client::builder()
            .user_agent(concat!("jira-sync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { search_url, client })
    }

    pub async fn search(
        &self,
        jql: &str,
        credentials: &ApiCredentials,
    ) -> Result<SearchResponse, SyncError> {
        debug!("POST {}", self.search_url);

        let body = SearchRequest {
            jql: jql.to_string(),
        };
        let response = self
            .client
            .post(self.search_url.clone())
            .basic_auth(&credentials.user, Some(&credentials.api_token))
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response.text().await.unwrap_or_else(|_| "<no body>".into());
            return Err(SyncError::Tracker {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json::<SearchResponse>().await?)
    }
}
