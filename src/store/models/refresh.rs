//! Raw re-visit event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshEvent {
    pub user_id: i64,
    pub refresh_id: String,
    pub refresh_time: DateTime<Utc>,
}
