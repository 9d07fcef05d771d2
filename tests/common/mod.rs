//! Shared fixtures: a throwaway store plus row seeding helpers.
//!
//! Seeding goes through `Store::execute` directly; the pipelines under test
//! only ever read.
#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, Utc};
use feedtrace::{Store, StoreConfig};
use tempfile::TempDir;

pub struct TestStore {
    pub store: Store,
    _dir: TempDir,
}

pub fn open_store() -> Result<TestStore> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let store = Store::open(dir.path().join("feedtrace.sqlite"), StoreConfig::default())?;
    Ok(TestStore { store, _dir: dir })
}

pub async fn insert_timeline(
    store: &Store,
    id: &str,
    user_id: i64,
    start_time: DateTime<Utc>,
) -> Result<()> {
    let id = id.to_string();
    let start_time = start_time.to_rfc3339();
    store
        .execute(move |conn| {
            conn.execute(
                "INSERT INTO timelines (id, user_id, start_time) VALUES (?1, ?2, ?3)",
                (id, user_id, start_time),
            )?;
            Ok(())
        })
        .await?;
    Ok(())
}

pub async fn insert_impression(
    store: &Store,
    timeline_id: &str,
    content_id: &str,
    order: i64,
) -> Result<()> {
    let timeline_id = timeline_id.to_string();
    let content_id = content_id.to_string();
    store
        .execute(move |conn| {
            conn.execute(
                "INSERT INTO impressions (timeline_id, content_id, impression_order)
                 VALUES (?1, ?2, ?3)",
                (timeline_id, content_id, order),
            )?;
            Ok(())
        })
        .await?;
    Ok(())
}

pub async fn insert_content(
    store: &Store,
    id: &str,
    saved_at: DateTime<Utc>,
    kind: Option<&str>,
    author: Option<&str>,
    body: &str,
) -> Result<()> {
    let id = id.to_string();
    let saved_at = saved_at.to_rfc3339();
    let kind = kind.map(str::to_string);
    let author = author.map(str::to_string);
    let body = body.to_string();
    store
        .execute(move |conn| {
            conn.execute(
                "INSERT INTO contents (id, saved_at, kind, author, body)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, saved_at, kind, author, body),
            )?;
            Ok(())
        })
        .await?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_presence(
    store: &Store,
    post_id: i64,
    user_id: i64,
    refresh_id: &str,
    order: i64,
    kind: &str,
    creation_time: DateTime<Utc>,
    display_time: Option<DateTime<Utc>>,
) -> Result<()> {
    let refresh_id = refresh_id.to_string();
    let kind = kind.to_string();
    let creation_time = creation_time.to_rfc3339();
    let display_time = display_time.map(|dt| dt.to_rfc3339());
    store
        .execute(move |conn| {
            conn.execute(
                "INSERT INTO presences
                 (post_id, user_id, refresh_id, display_order, kind, creation_time, display_time)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                (post_id, user_id, refresh_id, order, kind, creation_time, display_time),
            )?;
            Ok(())
        })
        .await?;
    Ok(())
}

pub async fn insert_refresh(
    store: &Store,
    user_id: i64,
    refresh_id: &str,
    refresh_time: DateTime<Utc>,
) -> Result<()> {
    let refresh_id = refresh_id.to_string();
    let refresh_time = refresh_time.to_rfc3339();
    store
        .execute(move |conn| {
            conn.execute(
                "INSERT INTO refreshes (user_id, refresh_id, refresh_time) VALUES (?1, ?2, ?3)",
                (user_id, refresh_id, refresh_time),
            )?;
            Ok(())
        })
        .await?;
    Ok(())
}
