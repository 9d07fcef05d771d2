//! Feed-view sample model.
//!
//! One row per time a tracked user's feed view began. Samples are the raw
//! material the display windows are reconstructed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSample {
    pub id: String,
    pub user_id: i64,
    pub start_time: DateTime<Utc>,
}
