//! The rule-set editing state machine.
//!
//! All mutations route through [`apply`], an explicit reducer over the closed
//! [`Command`] enum. Operations are total: a command whose precondition does
//! not hold (typically "a rule set must be selected") is a silent no-op, not
//! an error. Callers that need the distinction can compare state before and
//! after, but the UI this models never does.

use tracing::{debug, warn};

use crate::types::{Rule, RuleId, RuleSet, RuleSetId};

/// Full editing state of the rule-set screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub rule_sets: Vec<RuleSet>,
    pub selected: Option<RuleSetId>,
    pub edit_mode: bool,
    /// Name being typed during a set-level edit session; committed by
    /// [`Command::SaveRuleSetChanges`], discarded when edit mode ends.
    pub staged_name: String,
}

impl State {
    /// Start from a fixed collection with nothing selected.
    #[must_use]
    pub fn with_rule_sets(rule_sets: Vec<RuleSet>) -> Self {
        Self {
            rule_sets,
            ..Self::default()
        }
    }

    /// The currently selected rule set, if the selection points at one.
    #[must_use]
    pub fn selected_rule_set(&self) -> Option<&RuleSet> {
        let id = self.selected?;
        self.rule_sets.iter().find(|rs| rs.id == id)
    }

    fn selected_rule_set_mut(&mut self) -> Option<&mut RuleSet> {
        let id = self.selected?;
        self.rule_sets.iter_mut().find(|rs| rs.id == id)
    }

    /// Rules of the selected set, empty when nothing is selected.
    #[must_use]
    pub fn selected_rules(&self) -> &[Rule] {
        match self.selected_rule_set() {
            Some(rs) => &rs.rules,
            None => &[],
        }
    }

    /// Highest rule-set id in the collection, 0 when empty.
    #[must_use]
    pub fn max_rule_set_id(&self) -> RuleSetId {
        self.rule_sets.iter().map(|rs| rs.id).max().unwrap_or(0)
    }

    /// Id for the next created rule set: max existing + 1.
    #[must_use]
    pub fn next_rule_set_id(&self) -> RuleSetId {
        self.max_rule_set_id() + 1
    }

    /// Highest rule id across every rule set, 0 when there are none.
    #[must_use]
    pub fn max_rule_id(&self) -> RuleId {
        self.rule_sets
            .iter()
            .map(RuleSet::max_rule_id)
            .max()
            .unwrap_or(0)
    }
}

/// Closed set of store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set (or clear) the selection. The id is stored without validation.
    SelectRuleSet(Option<RuleSetId>),
    /// Append a rule set and select it.
    AddRuleSet {
        id: RuleSetId,
        name: String,
        rules: Vec<Rule>,
    },
    /// Enter or leave set-level edit mode. Entering requires a selection and
    /// stages the current name; leaving discards the staged name.
    SetEditMode(bool),
    /// Replace the staged name. Nothing is committed.
    UpdateRuleSetName(String),
    /// Commit the staged name onto the selected set and leave edit mode.
    SaveRuleSetChanges,
    /// Remove the selected set, clearing selection and edit mode.
    DeleteRuleSet,
    /// Append a draft rule (`is_new`) to the selected set.
    AddRule,
    /// Remove a rule by id from the selected set.
    DeleteRule(RuleId),
    /// Replace the matching rule in the selected set, normalized, `is_new`
    /// cleared.
    UpdateRule(Rule),
    /// Duplicate a rule set under a non-colliding `_(n)` name and select the
    /// copy. Copied rules get fresh, globally unique ids.
    CopyRuleSet(RuleSetId),
}

/// Apply one command to the state.
pub fn apply(state: &mut State, command: Command) {
    debug!(?command, "applying store command");
    match command {
        Command::SelectRuleSet(id) => {
            state.selected = id;
        }

        Command::AddRuleSet { id, name, rules } => {
            state.rule_sets.push(RuleSet::new(id, name, rules));
            state.selected = Some(id);
        }

        Command::SetEditMode(enabled) => {
            if enabled {
                let Some(name) = state.selected_rule_set().map(|rs| rs.name.clone()) else {
                    warn!("ignoring edit-mode request with no rule set selected");
                    return;
                };
                state.staged_name = name;
                state.edit_mode = true;
            } else {
                state.edit_mode = false;
                state.staged_name.clear();
            }
        }

        Command::UpdateRuleSetName(name) => {
            state.staged_name = name;
        }

        Command::SaveRuleSetChanges => {
            if state.selected.is_none() {
                warn!("ignoring save with no rule set selected");
                return;
            }
            let staged = std::mem::take(&mut state.staged_name);
            if let Some(rule_set) = state.selected_rule_set_mut() {
                rule_set.name = staged;
            }
            state.edit_mode = false;
        }

        Command::DeleteRuleSet => {
            let Some(id) = state.selected else {
                warn!("ignoring delete with no rule set selected");
                return;
            };
            state.rule_sets.retain(|rs| rs.id != id);
            state.selected = None;
            state.edit_mode = false;
        }

        Command::AddRule => {
            let Some(rule_set) = state.selected_rule_set_mut() else {
                warn!("ignoring add-rule with no rule set selected");
                return;
            };
            let id = rule_set.next_rule_id();
            rule_set.rules.push(Rule::draft(id));
        }

        Command::DeleteRule(rule_id) => {
            let Some(rule_set) = state.selected_rule_set_mut() else {
                warn!("ignoring delete-rule with no rule set selected");
                return;
            };
            rule_set.rules.retain(|r| r.id != rule_id);
        }

        Command::UpdateRule(mut rule) => {
            rule.is_new = false;
            rule.normalize();
            let Some(rule_set) = state.selected_rule_set_mut() else {
                warn!("ignoring update-rule with no rule set selected");
                return;
            };
            if let Some(slot) = rule_set.rules.iter_mut().find(|r| r.id == rule.id) {
                *slot = rule;
            }
        }

        Command::CopyRuleSet(source_id) => copy_rule_set(state, source_id),
    }
}

fn copy_rule_set(state: &mut State, source_id: RuleSetId) {
    let Some(source) = state.rule_sets.iter().find(|rs| rs.id == source_id) else {
        warn!(source_id, "ignoring copy of unknown rule set");
        return;
    };

    let new_name = copy_name(&source.name, &state.rule_sets);
    let new_id = state.next_rule_set_id();

    // Fresh ids are allocated past the global maximum so the copy can never
    // collide with any rule anywhere in the collection.
    let base_rule_id = state.max_rule_id();
    let new_rules: Vec<Rule> = source
        .rules
        .iter()
        .enumerate()
        .map(|(offset, rule)| {
            let mut copied = rule.clone();
            copied.id = base_rule_id + 1 + offset as RuleId;
            copied
        })
        .collect();

    state.rule_sets.push(RuleSet::new(new_id, new_name, new_rules));
    state.selected = Some(new_id);
}

/// First `{base}_(n)` that collides with no existing rule-set name.
fn copy_name(base: &str, existing: &[RuleSet]) -> String {
    let mut counter = 1;
    let mut candidate = format!("{base}_({counter})");
    while existing.iter().any(|rs| rs.name == candidate) {
        counter += 1;
        candidate = format!("{base}_({counter})");
    }
    candidate
}
