pub mod search;
pub mod secret;

use serde::{Deserialize, Serialize};

/// Invocation outcome returned to the triggering environment.
/// Carries the status code and nothing else.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
