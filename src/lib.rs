mod directory;
mod editor;
mod error;
mod persist;
mod rows;
mod seed;
pub mod serial;
mod store;
mod types;

pub use directory::{avatar_url, paginate, Directory, DirectoryError, PageRequest, UserPage, UserSource};
pub use editor::Editor;
pub use error::RuleboardError;
pub use persist::{BlobStore, FileStore, MemoryStore, Store, STATE_KEY};
pub use rows::{RowMode, RowModes, RowState};
pub use seed::seed_rule_sets;
pub use store::{apply, Command, State};
pub use types::{
    Comparator, Rule, RuleAction, RuleId, RuleSet, RuleSetId, Threshold, Unit, User, UsersEnvelope,
    UsersPayload,
};
