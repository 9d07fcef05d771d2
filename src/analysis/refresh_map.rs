//! Window / impression / metadata pipeline.
//!
//! Rebuilds a user's recent display windows, loads the ordered impressions
//! inside each one, and resolves metadata for every unique content reference
//! seen across them. Array positions in the response line up: the impressions
//! at index *i* belong to the window at index *i*.

use std::collections::HashSet;

use chrono::Duration;
use futures::{stream, StreamExt, TryStreamExt};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::params::RefreshMapParams;
use crate::analysis::windows::{self, Window};
use crate::error::Result;
use crate::store::models::{ContentUnit, Impression};
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshMap {
    pub timelines: Vec<Window>,
    pub impressions: Vec<Vec<Impression>>,
    pub metadata: Vec<ContentUnit>,
}

pub async fn refresh_map(
    store: &Store,
    params: &RefreshMapParams,
    config: &AnalysisConfig,
) -> Result<RefreshMap> {
    let request = Uuid::new_v4();
    debug!(
        "[refresh_map] {request} user {} ({} timelines, {} impressions each)",
        params.user_id, params.timeline_count, params.impression_cap
    );

    // Newest-first limited read, reversed into ascending order for the fold.
    let mut samples = store
        .recent_timelines(params.user_id, params.timeline_count)
        .await?;
    samples.reverse();

    let grace = Duration::seconds(config.terminal_window_grace_secs as i64);
    let timelines = windows::reconstruct(&samples, params.timeline_count, grace)?;

    // One capped query per window; `buffered` keeps results aligned with the
    // window positions regardless of completion order.
    let impressions: Vec<Vec<Impression>> = stream::iter(timelines.iter().map(|window| {
        let store = store.clone();
        let timeline_id = window.id.clone();
        let cap = params.impression_cap;
        async move { store.impressions_for_timeline(&timeline_id, cap).await }
    }))
    .buffered(config.fan_out)
    .try_collect()
    .await?;

    let mut seen = HashSet::new();
    let mut unique_refs = Vec::new();
    for impression in impressions.iter().flatten() {
        if seen.insert(impression.content_id.clone()) {
            unique_refs.push(impression.content_id.clone());
        }
    }
    debug!(
        "[refresh_map] {request} querying {} unique content units",
        unique_refs.len()
    );

    // A reference that no longer resolves (purged content) is omitted rather
    // than failing the request.
    let metadata: Vec<ContentUnit> = stream::iter(unique_refs.into_iter().map(|content_id| {
        let store = store.clone();
        async move { store.content_unit(&content_id).await }
    }))
    .buffered(config.fan_out)
    .try_collect::<Vec<Option<ContentUnit>>>()
    .await?
    .into_iter()
    .flatten()
    .collect();

    Ok(RefreshMap {
        timelines,
        impressions,
        metadata,
    })
}
