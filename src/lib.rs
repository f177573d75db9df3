pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod schemas;

// Re-export primary API so binaries can `use jira_sync::*` cleanly.
pub use config::{AwsConfig, Config};
pub use error::SyncError;
pub use handler::{OBJECT_KEY, run};
pub use logger::{LogLevel, init_logger, log};
pub use schemas::Response;
