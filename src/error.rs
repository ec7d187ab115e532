use thiserror::Error;

use crate::directory::DirectoryError;
use crate::serial::{DeserializeError, SerializeError};

/// Unified error type covering persistence and the user directory.
///
/// Store operations themselves never fail (invalid preconditions are silent
/// no-ops), so this only surfaces from the snapshot and directory layers.
#[derive(Debug, Error)]
pub enum RuleboardError {
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
