//! Store gateway.
//!
//! All collections live in one SQLite database owned by a dedicated worker
//! thread; callers hand closures to [`Store::execute`] and await the reply, so
//! no connection handle ever crosses an await point. The typed read methods
//! the pipelines use live in `queries.rs`.

use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use log::{error, info};
use rusqlite::Connection;
use tokio::sync::oneshot;

mod config;
mod helpers;
mod migrations;
pub mod models;
mod queries;

pub use config::StoreConfig;

use crate::error::{Error, Result};
use migrations::run_migrations;

type StoreTask = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

enum StoreCommand {
    Execute(StoreTask),
    Shutdown,
}

struct StoreInner {
    sender: mpsc::Sender<StoreCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let mut guard = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = guard.take() {
            if let Err(err) = self.sender.send(StoreCommand::Shutdown) {
                error!("Failed to send shutdown to store thread: {err}");
            }
            if let Err(join_err) = handle.join() {
                error!("Failed to join store thread: {join_err:?}");
            }
        }
    }
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
    config: Arc<StoreConfig>,
    db_path: Arc<PathBuf>,
}

impl Store {
    pub fn open(db_path: PathBuf, config: StoreConfig) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                Error::StoreUnavailable(format!(
                    "failed to create store directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let (command_tx, command_rx) = mpsc::channel::<StoreCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let path_for_thread = db_path.clone();
        let config_for_thread = config.clone();

        let worker = thread::Builder::new()
            .name("feedtrace-store".into())
            .spawn(move || {
                let mut conn = match Connection::open(&path_for_thread) {
                    Ok(connection) => connection,
                    Err(err) => {
                        let _ = ready_tx.send(Err(Error::StoreUnavailable(format!(
                            "failed to open SQLite database: {err}"
                        ))));
                        return;
                    }
                };

                if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
                    error!("Failed to enable WAL mode: {err}");
                }

                let init_result = run_migrations(&mut conn, &config_for_thread);
                if ready_tx.send(init_result).is_err() {
                    error!("Store initialization receiver dropped before ready signal");
                    return;
                }

                while let Ok(command) = command_rx.recv() {
                    match command {
                        StoreCommand::Execute(task) => {
                            task(&mut conn);
                        }
                        StoreCommand::Shutdown => break,
                    }
                }

                info!("Store thread shutting down");
            })
            .map_err(|err| {
                Error::StoreUnavailable(format!("failed to spawn store worker thread: {err}"))
            })?;

        ready_rx.recv().map_err(|_| {
            Error::StoreUnavailable("store worker exited before signaling readiness".into())
        })??;

        info!("Store initialized at {}", db_path.as_path().display());

        Ok(Self {
            inner: Arc::new(StoreInner {
                sender: command_tx,
                worker: Mutex::new(Some(worker)),
            }),
            config: Arc::new(config),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sender = self.inner.sender.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        let command = StoreCommand::Execute(Box::new(move |conn| {
            let result = task(conn);
            if reply_tx.send(result).is_err() {
                error!("Store caller dropped before receiving result");
            }
        }));

        sender.send(command).map_err(|err| {
            Error::StoreUnavailable(format!("failed to send command to store thread: {err}"))
        })?;

        reply_rx
            .await
            .map_err(|_| Error::StoreUnavailable("store thread terminated unexpectedly".into()))?
    }
}
