//! Snapshot persistence: a key-value blob collaborator plus the [`Store`]
//! wrapper that writes a full-state snapshot after every mutation.
//!
//! Writes are fire-and-forget: a failed write is logged and the in-memory
//! state stays authoritative. The snapshot is read exactly once, at startup;
//! a missing or unreadable snapshot falls back to the seed data.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::RuleboardError;
use crate::seed::seed_rule_sets;
use crate::serial::{decode_state, encode_state};
use crate::store::{apply, Command, State};

/// Fixed key under which the console state is persisted.
pub const STATE_KEY: &str = "rule-sets";

/// Key-value blob storage collaborator.
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns any underlying I/O error other than the blob being absent.
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Write `bytes` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns any underlying I/O error.
    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()>;
}

/// In-memory blob store, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.blobs.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }
}

/// Blob store backed by a directory, one `<key>.bin` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) the directory holding the blobs.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.bin"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.path_for(key), bytes)
    }
}

/// The persisted rule-set store: reducer state plus the blob collaborator.
pub struct Store {
    state: State,
    blobs: Box<dyn BlobStore>,
}

impl Store {
    /// Rehydrate from the blob store, seeding when no usable snapshot exists.
    #[must_use]
    pub fn open(blobs: Box<dyn BlobStore>) -> Self {
        let state = match blobs.read(STATE_KEY) {
            Ok(Some(bytes)) => match decode_state(&bytes) {
                Ok(state) => state,
                Err(e) => {
                    warn!(error = %e, "discarding unreadable snapshot, starting from seed");
                    State::with_rule_sets(seed_rule_sets())
                }
            },
            Ok(None) => State::with_rule_sets(seed_rule_sets()),
            Err(e) => {
                warn!(error = %e, "failed to read snapshot, starting from seed");
                State::with_rule_sets(seed_rule_sets())
            }
        };
        Self { state, blobs }
    }

    /// Rehydrate from `<dir>/rule-sets.bin`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleboardError::Io`] if the directory cannot be created.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, RuleboardError> {
        Ok(Self::open(Box::new(FileStore::new(dir)?)))
    }

    /// A store over the given state, for callers that manage their own seed.
    #[must_use]
    pub fn with_state(state: State, blobs: Box<dyn BlobStore>) -> Self {
        Self { state, blobs }
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Apply a command and snapshot the resulting state.
    pub fn dispatch(&mut self, command: Command) {
        apply(&mut self.state, command);
        self.persist();
    }

    fn persist(&mut self) {
        let bytes = match encode_state(&self.state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "failed to encode snapshot");
                return;
            }
        };
        if let Err(e) = self.blobs.write(STATE_KEY, &bytes) {
            warn!(error = %e, "failed to write snapshot");
        }
    }
}
