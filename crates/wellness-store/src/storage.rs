//! JSON file storage for the check-in log.
//!
//! The whole log lives in one pretty-printed JSON document. Every append is
//! a read-modify-write of that document, serialized per storage path and
//! made durable by writing a temp file next to the log and renaming it over
//! the old one.

use crate::error::{MalformedLogError, PersistenceError};
use crate::schema::{CheckInLog, CheckInRecord, NewCheckIn};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDateTime};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Append locks, one per storage path, shared by every store handle.
static APPEND_LOCKS: LazyLock<Mutex<HashMap<Utf8PathBuf, Arc<Mutex<()>>>>> =
    LazyLock::new(Default::default);

fn registry_lock(path: &Utf8Path) -> Arc<Mutex<()>> {
    let mut locks = APPEND_LOCKS.lock().unwrap_or_else(PoisonError::into_inner);
    locks.entry(lock_key(path)).or_default().clone()
}

/// Resolve the directory part so that `./log.json` and `log.json` share a
/// lock. Only meaningful once the directory exists.
fn lock_key(path: &Utf8Path) -> Utf8PathBuf {
    match (parent_dir(path).canonicalize_utf8(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_owned(),
    }
}

fn parent_dir(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or(Utf8Path::new("."))
}

/// Result of reading the log, before recovery is collapsed for callers.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The log was read, or did not exist yet and is empty.
    Loaded(CheckInLog),
    /// The log exists but could not be read or parsed; `log` is empty.
    Recovered {
        log: CheckInLog,
        diagnostic: MalformedLogError,
    },
}

impl LoadOutcome {
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }

    pub fn diagnostic(&self) -> Option<&MalformedLogError> {
        match self {
            Self::Loaded(_) => None,
            Self::Recovered { diagnostic, .. } => Some(diagnostic),
        }
    }

    /// Drop the diagnostic and keep the log.
    pub fn into_log(self) -> CheckInLog {
        match self {
            Self::Loaded(log) | Self::Recovered { log, .. } => log,
        }
    }
}

/// JSON-file check-in store.
#[derive(Debug, Clone)]
pub struct CheckInStore {
    /// Path to the JSON log
    path: Utf8PathBuf,
}

impl CheckInStore {
    /// Create a store for the log at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Sidecar file holding the cross-process append lock.
    pub fn lock_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.lock", self.path))
    }

    /// Ensure storage directory exists.
    pub fn ensure_dir(&self) -> Result<(), PersistenceError> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|source| PersistenceError::CreateDir {
            path: dir.to_owned(),
            source,
        })
    }

    /// Read the log, reporting whether recovery was needed.
    pub fn load_outcome(&self) -> LoadOutcome {
        // Raw bytes, so undecodable content is a parse failure and not an I/O one.
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return LoadOutcome::Loaded(CheckInLog::default());
            }
            Err(source) => {
                return LoadOutcome::Recovered {
                    log: CheckInLog::default(),
                    diagnostic: MalformedLogError::Unreadable {
                        path: self.path.clone(),
                        source,
                    },
                };
            }
        };

        match serde_json::from_slice(&content) {
            Ok(log) => LoadOutcome::Loaded(log),
            Err(source) => LoadOutcome::Recovered {
                log: CheckInLog::default(),
                diagnostic: MalformedLogError::Parse {
                    path: self.path.clone(),
                    source,
                },
            },
        }
    }

    /// Read the log. A missing log is empty; an unreadable or corrupt one
    /// is logged at warning level and treated as empty.
    pub fn load(&self) -> CheckInLog {
        match self.load_outcome() {
            LoadOutcome::Loaded(log) => log,
            LoadOutcome::Recovered { log, diagnostic } => {
                warn!(path = %self.path, error = %diagnostic, "could not load check-in log, starting fresh");
                log
            }
        }
    }

    /// Count persisted check-ins.
    pub fn count(&self) -> usize {
        self.load().len()
    }

    /// Append a check-in stamped with the current local time.
    pub fn append(&self, entry: NewCheckIn) -> Result<CheckInRecord, PersistenceError> {
        self.append_with(entry, || Local::now().naive_local())
    }

    /// Append a check-in stamped with `at`.
    pub fn append_at(
        &self,
        entry: NewCheckIn,
        at: NaiveDateTime,
    ) -> Result<CheckInRecord, PersistenceError> {
        self.append_with(entry, || at)
    }

    fn append_with(
        &self,
        entry: NewCheckIn,
        now: impl FnOnce() -> NaiveDateTime,
    ) -> Result<CheckInRecord, PersistenceError> {
        self.ensure_dir()?;
        let append_lock = self.append_lock();
        let _guard = append_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _file_lock = self.lock_exclusive()?;

        let mut log = match self.load_outcome() {
            LoadOutcome::Loaded(log) => log,
            LoadOutcome::Recovered { diagnostic, .. } if diagnostic.is_unreadable() => {
                return Err(PersistenceError::Unreadable(diagnostic));
            }
            LoadOutcome::Recovered { log, diagnostic } => {
                self.quarantine(&diagnostic)?;
                log
            }
        };

        // Stamped under the lock so insertion order stays chronological.
        let record = entry.into_record(now());
        log.push(record.clone());
        self.persist(&log)?;

        info!(
            path = %self.path,
            count = log.len(),
            mood = %record.mood,
            energy = %record.energy,
            "check-in saved"
        );
        Ok(record)
    }

    /// In-process append lock for this path. Looked up after the directory
    /// exists so every handle resolves the same key.
    fn append_lock(&self) -> Arc<Mutex<()>> {
        registry_lock(&self.path)
    }

    /// Open the sidecar lock file and block until it is exclusively held.
    /// The lock is released when the returned file is dropped.
    fn lock_exclusive(&self) -> Result<File, PersistenceError> {
        let lock_path = self.lock_path();
        let lock_err = |source| PersistenceError::Lock {
            path: lock_path.clone(),
            source,
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(lock_err)?;
        FileExt::lock_exclusive(&file).map_err(lock_err)?;
        debug!(path = %lock_path, "acquired append lock");
        Ok(file)
    }

    /// Move a corrupt log aside so the fresh one does not destroy it.
    fn quarantine(&self, diagnostic: &MalformedLogError) -> Result<Utf8PathBuf, PersistenceError> {
        let backup = Utf8PathBuf::from(format!(
            "{}.corrupt-{}",
            self.path,
            Local::now().format("%Y%m%dT%H%M%S%6f")
        ));
        fs::rename(&self.path, &backup).map_err(|source| PersistenceError::Quarantine {
            path: self.path.clone(),
            backup: backup.clone(),
            source,
        })?;
        warn!(
            path = %self.path,
            backup = %backup,
            error = %diagnostic,
            "moved corrupt check-in log aside"
        );
        Ok(backup)
    }

    /// Replace the log file with `log` in one rename.
    fn persist(&self, log: &CheckInLog) -> Result<(), PersistenceError> {
        let write_err = |source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        let mut json = serde_json::to_vec_pretty(log)?;
        json.push(b'\n');

        let mut tmp = NamedTempFile::new_in(parent_dir(&self.path)).map_err(write_err)?;
        tmp.write_all(&json).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path)
            .map_err(|e| PersistenceError::Persist {
                path: self.path.clone(),
                source: e.error,
            })?;
        sync_dir(parent_dir(&self.path)).map_err(|source| PersistenceError::Persist {
            path: self.path.clone(),
            source,
        })
    }
}

/// Flush the directory entry so the rename survives a crash.
#[cfg(unix)]
fn sync_dir(dir: &Utf8Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Utf8Path) -> io::Result<()> {
    Ok(())
}
