mod rule;
mod ruleset;
mod user;

pub use rule::{Comparator, Rule, RuleAction, RuleId, Threshold, Unit};
pub use ruleset::{RuleSet, RuleSetId};
pub use user::{User, UsersEnvelope, UsersPayload};
