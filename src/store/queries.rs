//! Typed read surface consumed by the pipelines.
//!
//! One bounded query per method; every method copies what it needs and runs
//! on the store worker thread. Timestamps are stored as RFC 3339 text, so
//! range predicates and `MAX` aggregate correctly as plain text comparisons.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::error::Result;
use crate::store::helpers::{parse_datetime, parse_optional_datetime, to_i64};
use crate::store::models::{
    ContentUnit, Impression, PostRelation, PresenceRecord, RefreshEvent, TimelineSample,
};
use crate::store::Store;

fn row_to_sample(row: &Row) -> Result<TimelineSample> {
    let start_time: String = row.get("start_time")?;
    Ok(TimelineSample {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        start_time: parse_datetime(&start_time, "start_time")?,
    })
}

fn row_to_impression(row: &Row) -> Result<Impression> {
    Ok(Impression {
        timeline_id: row.get("timeline_id")?,
        content_id: row.get("content_id")?,
        order: row.get("impression_order")?,
    })
}

fn row_to_presence(row: &Row) -> Result<PresenceRecord> {
    let creation_time: String = row.get("creation_time")?;
    Ok(PresenceRecord {
        refresh_id: row.get("refresh_id")?,
        order: row.get("display_order")?,
        kind: row.get("kind")?,
        creation_time: parse_datetime(&creation_time, "creation_time")?,
    })
}

fn row_to_refresh(row: &Row) -> Result<RefreshEvent> {
    let refresh_time: String = row.get("refresh_time")?;
    Ok(RefreshEvent {
        user_id: row.get("user_id")?,
        refresh_id: row.get("refresh_id")?,
        refresh_time: parse_datetime(&refresh_time, "refresh_time")?,
    })
}

impl Store {
    /// The user's most recent feed-view samples, newest first. Callers reverse
    /// into ascending order before reconstructing windows.
    pub async fn recent_timelines(&self, user_id: i64, limit: usize) -> Result<Vec<TimelineSample>> {
        let table = self.config().timelines.clone();
        let limit = to_i64(limit)?;
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT id, user_id, start_time
                 FROM {table}
                 WHERE user_id = ?1
                 ORDER BY start_time DESC
                 LIMIT ?2"
            ))?;

            let mut rows = stmt.query(params![user_id, limit])?;
            let mut samples = Vec::new();
            while let Some(row) = rows.next()? {
                samples.push(row_to_sample(row)?);
            }

            Ok(samples)
        })
        .await
    }

    /// Ordered content references inside one feed view, capped.
    pub async fn impressions_for_timeline(
        &self,
        timeline_id: &str,
        cap: usize,
    ) -> Result<Vec<Impression>> {
        let table = self.config().impressions.clone();
        let timeline_id = timeline_id.to_string();
        let cap = to_i64(cap)?;
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT timeline_id, content_id, impression_order
                 FROM {table}
                 WHERE timeline_id = ?1
                 ORDER BY impression_order ASC
                 LIMIT ?2"
            ))?;

            let mut rows = stmt.query(params![timeline_id, cap])?;
            let mut impressions = Vec::new();
            while let Some(row) = rows.next()? {
                impressions.push(row_to_impression(row)?);
            }

            Ok(impressions)
        })
        .await
    }

    /// Metadata projection for one content reference. The bulk body column is
    /// never selected. `None` when the reference no longer resolves.
    pub async fn content_unit(&self, content_id: &str) -> Result<Option<ContentUnit>> {
        let table = self.config().contents.clone();
        let content_id = content_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT id, saved_at, kind, author
                 FROM {table}
                 WHERE id = ?1"
            ))?;

            let mut rows = stmt.query(params![content_id])?;
            if let Some(row) = rows.next()? {
                let saved_at: String = row.get("saved_at")?;
                Ok(Some(ContentUnit {
                    id: row.get("id")?,
                    saved_at: parse_datetime(&saved_at, "saved_at")?,
                    kind: row.get("kind")?,
                    author: row.get("author")?,
                }))
            } else {
                Ok(None)
            }
        })
        .await
    }

    /// All presence evidence for a post, ascending by creation time, so the
    /// first record carries the earliest evidence.
    pub async fn presence_records(&self, post_id: i64) -> Result<Vec<PresenceRecord>> {
        let table = self.config().presences.clone();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT refresh_id, display_order, kind, creation_time
                 FROM {table}
                 WHERE post_id = ?1
                 ORDER BY creation_time ASC"
            ))?;

            let mut rows = stmt.query(params![post_id])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_presence(row)?);
            }

            Ok(records)
        })
        .await
    }

    /// Per-post relation aggregate: the distinct users involved and the most
    /// recent display time across all of them.
    pub async fn post_relation(&self, post_id: i64) -> Result<PostRelation> {
        let table = self.config().presences.clone();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT DISTINCT user_id
                 FROM {table}
                 WHERE post_id = ?1
                 ORDER BY user_id ASC"
            ))?;

            let mut rows = stmt.query(params![post_id])?;
            let mut users = Vec::new();
            while let Some(row) = rows.next()? {
                users.push(row.get::<_, i64>("user_id")?);
            }

            let last: Option<String> = conn.query_row(
                &format!("SELECT MAX(display_time) FROM {table} WHERE post_id = ?1"),
                params![post_id],
                |row| row.get(0),
            )?;

            Ok(PostRelation {
                post_id,
                users,
                last: parse_optional_datetime(last, "display_time")?,
            })
        })
        .await
    }

    /// Refresh events strictly inside `(begin, end)`, ascending. Events
    /// exactly at either bound are excluded.
    pub async fn refreshes_between(
        &self,
        user_id: i64,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RefreshEvent>> {
        let table = self.config().refreshes.clone();
        let begin = begin.to_rfc3339();
        let end = end.to_rfc3339();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT user_id, refresh_id, refresh_time
                 FROM {table}
                 WHERE user_id = ?1 AND refresh_time > ?2 AND refresh_time < ?3
                 ORDER BY refresh_time ASC"
            ))?;

            let mut rows = stmt.query(params![user_id, begin, end])?;
            let mut events = Vec::new();
            while let Some(row) = rows.next()? {
                events.push(row_to_refresh(row)?);
            }

            Ok(events)
        })
        .await
    }
}
