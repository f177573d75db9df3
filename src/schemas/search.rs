use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub jql: String,
}

/// Search reply from the tracker. Only `issues` is consumed; the
/// records themselves are opaque and passed through in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub issues: Vec<Value>,
}
