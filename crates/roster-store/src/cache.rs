//! Local roster cache with a freshness window.
//!
//! Fetching the master roster is the slow path (it lives in an external
//! store), so callers keep a local snapshot and only refetch once it goes
//! stale. The cache is two files in one directory: the roster itself and a
//! metadata sidecar carrying the fetch timestamp and a content checksum.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use roster_model::RosterEntry;

use crate::error::{Result, StoreError};
use crate::hash::sha256_hex;

/// Freshness window applied when the caller does not pick one.
pub const DEFAULT_MAX_AGE_MINUTES: i64 = 60;

const ROSTER_FILE: &str = "roster.json";
const META_FILE: &str = "roster.meta.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheMetadata {
    fetched_at: DateTime<Utc>,
    sha256: String,
    entries: usize,
}

/// Directory-backed roster snapshot.
#[derive(Debug, Clone)]
pub struct RosterCache {
    dir: PathBuf,
}

impl RosterCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn roster_path(&self) -> PathBuf {
        self.dir.join(ROSTER_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Write the roster snapshot and its metadata sidecar.
    pub fn store(&self, roster: &[RosterEntry]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::io(&self.dir, source))?;

        let names: Vec<&str> = roster.iter().map(|entry| entry.name.as_str()).collect();
        let payload = serde_json::to_vec_pretty(&names).map_err(|source| StoreError::Json {
            path: self.roster_path(),
            source,
        })?;
        fs::write(self.roster_path(), &payload)
            .map_err(|source| StoreError::io(self.roster_path(), source))?;

        let metadata = CacheMetadata {
            fetched_at: Utc::now(),
            sha256: sha256_hex(&payload),
            entries: names.len(),
        };
        let metadata_bytes =
            serde_json::to_vec_pretty(&metadata).map_err(|source| StoreError::Json {
                path: self.meta_path(),
                source,
            })?;
        fs::write(self.meta_path(), metadata_bytes)
            .map_err(|source| StoreError::io(self.meta_path(), source))?;

        debug!(dir = %self.dir.display(), entries = roster.len(), "stored roster cache");
        Ok(())
    }

    /// Load the cached roster when it is present, fresh, and checksum-clean.
    ///
    /// Returns `None` (never an error) for the refetch cases: cache missing,
    /// older than `max_age`, metadata unreadable, or content tampered.
    pub fn load(&self, max_age: Duration) -> Result<Option<Vec<RosterEntry>>> {
        self.load_at(Utc::now(), max_age)
    }

    /// [`Self::load`] against an explicit clock, for deterministic tests.
    pub fn load_at(
        &self,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> Result<Option<Vec<RosterEntry>>> {
        let metadata_bytes = match fs::read(self.meta_path()) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::io(self.meta_path(), source)),
        };
        let metadata: CacheMetadata = match serde_json::from_slice(&metadata_bytes) {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!(path = %self.meta_path().display(), %error, "unreadable cache metadata, refetching");
                return Ok(None);
            }
        };

        if now.signed_duration_since(metadata.fetched_at) >= max_age {
            debug!(dir = %self.dir.display(), "roster cache is stale");
            return Ok(None);
        }

        let payload = match fs::read(self.roster_path()) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::io(self.roster_path(), source)),
        };
        if sha256_hex(&payload) != metadata.sha256 {
            warn!(path = %self.roster_path().display(), "roster cache checksum mismatch, refetching");
            return Ok(None);
        }

        let names: Vec<String> = match serde_json::from_slice(&payload) {
            Ok(names) => names,
            Err(error) => {
                warn!(path = %self.roster_path().display(), %error, "unreadable roster cache, refetching");
                return Ok(None);
            }
        };
        debug!(dir = %self.dir.display(), entries = names.len(), "roster cache hit");
        Ok(Some(RosterEntry::sequence(names)))
    }
}
