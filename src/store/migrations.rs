use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::store::config::StoreConfig;

const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Bring the backing database up to the current schema. Table names come from
/// the store configuration, so the statements are assembled here instead of
/// shipping as static SQL files.
pub fn run_migrations(conn: &mut Connection, config: &StoreConfig) -> Result<()> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version > CURRENT_SCHEMA_VERSION {
        return Err(Error::StoreUnavailable(format!(
            "database version ({version}) is newer than supported schema ({CURRENT_SCHEMA_VERSION})"
        )));
    }

    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(&schema_v1(config))?;
    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)?;
    tx.commit()?;

    Ok(())
}

fn schema_v1(config: &StoreConfig) -> String {
    let StoreConfig {
        timelines,
        impressions,
        contents,
        presences,
        refreshes,
    } = config;

    format!(
        "CREATE TABLE IF NOT EXISTS {timelines} (
            id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            start_time TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_{timelines}_user_start
            ON {timelines}(user_id, start_time);

        CREATE TABLE IF NOT EXISTS {impressions} (
            timeline_id TEXT NOT NULL,
            content_id TEXT NOT NULL,
            impression_order INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_{impressions}_timeline_order
            ON {impressions}(timeline_id, impression_order);

        CREATE TABLE IF NOT EXISTS {contents} (
            id TEXT PRIMARY KEY,
            saved_at TEXT NOT NULL,
            kind TEXT,
            author TEXT,
            body TEXT
        );

        CREATE TABLE IF NOT EXISTS {presences} (
            post_id INTEGER NOT NULL,
            user_id INTEGER NOT NULL,
            refresh_id TEXT NOT NULL,
            display_order INTEGER NOT NULL,
            kind TEXT NOT NULL,
            creation_time TEXT NOT NULL,
            display_time TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_{presences}_post
            ON {presences}(post_id);

        CREATE TABLE IF NOT EXISTS {refreshes} (
            user_id INTEGER NOT NULL,
            refresh_id TEXT NOT NULL,
            refresh_time TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_{refreshes}_user_time
            ON {refreshes}(user_id, refresh_time);"
    )
}
