//! Content metadata projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lightweight metadata for one piece of content. The stored row also carries
/// the raw body, which is never selected into this projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentUnit {
    pub id: String,
    pub saved_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
