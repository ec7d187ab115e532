use super::rule::{Rule, RuleId};

/// Identifier of a rule set within the collection.
pub type RuleSetId = u32;

/// A named, ordered collection of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub id: RuleSetId,
    pub name: String,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new(id: RuleSetId, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            id,
            name: name.into(),
            rules,
        }
    }

    /// Look up a rule by id.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Highest rule id in this set, 0 when empty.
    #[must_use]
    pub fn max_rule_id(&self) -> RuleId {
        self.rules.iter().map(|r| r.id).max().unwrap_or(0)
    }

    /// Id for the next appended rule: max existing + 1, so 1 for an empty set.
    #[must_use]
    pub fn next_rule_id(&self) -> RuleId {
        self.max_rule_id() + 1
    }
}
