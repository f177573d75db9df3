use thiserror::Error;

/// Fault taxonomy for one sync run. Every variant is flattened to a
/// plain 500 at the handler boundary; the variants exist for logs and
/// tests, not for the invoker.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not get api token from secrets manager: {0}")]
    Secret(String),

    #[error("could not get data from JIRA - status code: {status}")]
    Tracker { status: u16, detail: String },

    #[error("storage error ({status}): {detail}")]
    Storage { status: u16, detail: String },
}

pub type Result<T> = std::result::Result<T, SyncError>;
