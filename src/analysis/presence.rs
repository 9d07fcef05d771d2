//! Presence correlation pipeline.
//!
//! The real picture of a post's visibility needs every re-visit a related
//! user made while the post could have been on screen, because the lack of a
//! sighting is itself information. Each refresh inside the visibility
//! interval is classified against the post's presence evidence and labelled
//! with a per-request pseudonym.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::config::AnalysisConfig;
use crate::analysis::params::PostRealityParams;
use crate::error::{Error, Result};
use crate::pseudonym;
use crate::store::models::{PresenceRecord, RefreshEvent};
use crate::store::Store;

/// One classified re-visit: did this refresh display the post or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub refresh_time: DateTime<Utc>,
    pub presence: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub user_pseudonym: String,
}

/// Correlate every related user's refreshes against the post's presence
/// records, flattened into one observation stream. Inter-user order is not
/// significant; each user's observations stay ascending by refresh time.
pub async fn post_reality<R: Rng>(
    store: &Store,
    params: &PostRealityParams,
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<Vec<Observation>> {
    let request = Uuid::new_v4();
    let post_id = params.post_id;
    debug!("[post_reality] {request} post {post_id}");

    let relation = store.post_relation(post_id).await?;
    let records = store.presence_records(post_id).await?;

    // Records arrive ascending by creation time, so the first one bounds the
    // interval from below. No evidence at all leaves it unbounded.
    let begin = records
        .first()
        .map(|record| record.creation_time)
        .ok_or(Error::IncompleteRelation { post_id })?;
    let last = relation.last.ok_or(Error::IncompleteRelation { post_id })?;
    let end = last + Duration::seconds(config.visibility_grace_secs as i64);

    // One label per user, drawn up front so a single request-scoped rng
    // serves the whole fan-out.
    let labelled: Vec<(i64, String)> = relation
        .users
        .iter()
        .map(|&user_id| (user_id, pseudonym::label(rng, user_id)))
        .collect();

    let records = Arc::new(records);
    let per_user: Vec<Vec<Observation>> = stream::iter(labelled.into_iter().map(
        |(user_id, label)| {
            let store = store.clone();
            let records = Arc::clone(&records);
            async move {
                let refreshes = store.refreshes_between(user_id, begin, end).await?;
                Ok::<_, Error>(classify(&refreshes, &records, &label))
            }
        },
    ))
    .buffered(config.fan_out)
    .try_collect()
    .await?;

    let user_count = per_user.len();
    let flat: Vec<Observation> = per_user.into_iter().flatten().collect();
    debug!(
        "[post_reality] {request} got {} observations for {} users",
        flat.len(),
        user_count
    );

    Ok(flat)
}

fn classify(
    refreshes: &[RefreshEvent],
    records: &[PresenceRecord],
    label: &str,
) -> Vec<Observation> {
    refreshes
        .iter()
        .map(|refresh| {
            match records
                .iter()
                .find(|record| record.refresh_id == refresh.refresh_id)
            {
                Some(record) => Observation {
                    refresh_time: refresh.refresh_time,
                    presence: true,
                    order: Some(record.order),
                    kind: Some(record.kind.clone()),
                    user_pseudonym: label.to_string(),
                },
                None => Observation {
                    refresh_time: refresh.refresh_time,
                    presence: false,
                    order: None,
                    kind: None,
                    user_pseudonym: label.to_string(),
                },
            }
        })
        .collect()
}
