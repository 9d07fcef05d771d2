//! On-screen content reference within a feed view.

use serde::{Deserialize, Serialize};

/// A single piece of content shown inside one feed view, at a fixed position.
/// The same `content_id` may recur across feed views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Impression {
    pub timeline_id: String,
    pub content_id: String,
    pub order: i64,
}
