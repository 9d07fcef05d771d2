//! Post presence models.
//!
//! A presence record is evidence that a specific refresh actually displayed a
//! given post; the relation aggregates, per post, the users involved and the
//! most recent display time across all of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    pub refresh_id: String,
    pub order: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub creation_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostRelation {
    pub post_id: i64,
    pub users: Vec<i64>,
    /// Most recent display time across all related users. `None` means the
    /// visibility interval cannot be bounded.
    pub last: Option<DateTime<Utc>>,
}
