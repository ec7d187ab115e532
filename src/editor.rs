//! View-level composition of the store and the row-edit controller.
//!
//! Mirrors the rules screen's handlers: session-level edit/save/cancel,
//! copy, and the inline row lifecycle. Destructive actions take a `confirm`
//! closure standing in for the view's confirmation prompt; the store itself
//! never asks.

use tracing::warn;

use crate::persist::Store;
use crate::rows::RowModes;
use crate::store::Command;
use crate::types::{Rule, RuleId, RuleSet, RuleSetId};

pub struct Editor {
    store: Store,
    rows: RowModes,
}

impl Editor {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            rows: RowModes::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[must_use]
    pub fn rows(&self) -> &RowModes {
        &self.rows
    }

    #[must_use]
    pub fn selected_rule_set(&self) -> Option<&RuleSet> {
        self.store.state().selected_rule_set()
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.store.state().selected_rules()
    }

    // -- selector ----------------------------------------------------------

    /// Select a rule set (or clear the selection).
    pub fn select(&mut self, id: Option<RuleSetId>) {
        self.store.dispatch(Command::SelectRuleSet(id));
    }

    /// The selector's "add new" entry: create an empty, auto-named rule set
    /// and select it.
    pub fn add_rule_set(&mut self) {
        let id = self.store.state().next_rule_set_id();
        self.store.dispatch(Command::AddRuleSet {
            id,
            name: format!("New Rule Set {id}"),
            rules: vec![],
        });
        self.store.dispatch(Command::SelectRuleSet(Some(id)));
    }

    // -- set-level session -------------------------------------------------

    /// Enter set-level edit mode. Requires a selection.
    pub fn begin_edit(&mut self) {
        if self.store.state().selected.is_some() {
            self.store.dispatch(Command::SetEditMode(true));
        }
    }

    /// Update the staged rule-set name as the user types.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.store.dispatch(Command::UpdateRuleSetName(name.into()));
    }

    /// Commit the staged name and leave edit mode.
    pub fn save_changes(&mut self) {
        if self.store.state().selected.is_some() {
            self.store.dispatch(Command::SaveRuleSetChanges);
        }
    }

    /// Leave edit mode without committing, dropping all row edit state.
    pub fn cancel_editing(&mut self, confirm: impl FnOnce() -> bool) {
        if confirm() {
            self.store.dispatch(Command::SetEditMode(false));
            self.rows.clear();
        }
    }

    /// Duplicate the selected rule set.
    pub fn copy_selected(&mut self) {
        let Some(id) = self.store.state().selected else {
            warn!("no rule set selected for copying");
            return;
        };
        self.store.dispatch(Command::CopyRuleSet(id));
    }

    /// Delete the selected rule set, gated by the view's confirmation.
    pub fn delete_rule_set(&mut self, confirm: impl FnOnce() -> bool) {
        if self.store.state().selected.is_some() && confirm() {
            self.store.dispatch(Command::DeleteRuleSet);
        }
    }

    // -- row lifecycle -----------------------------------------------------

    /// Whether the row currently being edited is an uncommitted new rule.
    /// While one exists, "add new rule" stays disabled.
    #[must_use]
    pub fn has_unsaved_new_rule(&self) -> bool {
        self.rows
            .editing()
            .and_then(|id| self.selected_rule_set().and_then(|rs| rs.rule(id)))
            .is_some_and(|rule| rule.is_new)
    }

    /// Append a draft rule and open it for editing.
    pub fn add_new_rule(&mut self) {
        if self.store.state().selected.is_none() || self.has_unsaved_new_rule() {
            return;
        }
        let Some(rule_set) = self.selected_rule_set() else {
            return;
        };
        let id = rule_set.next_rule_id();
        self.store.dispatch(Command::AddRule);
        self.rows.enter_edit(id);
    }

    /// Put a row into edit mode, closing any other open row editor.
    pub fn edit_row(&mut self, id: RuleId) {
        self.rows.enter_edit(id);
    }

    /// Return a row to view mode after its staged edits were committed
    /// through [`Editor::commit_row`].
    pub fn save_row(&mut self, id: RuleId) {
        self.rows.save(id);
    }

    /// Cancel a row edit. An uncommitted new rule is discarded entirely; an
    /// existing rule is left as it was.
    pub fn cancel_row(&mut self, id: RuleId) {
        self.rows.cancel(id);
        let is_new = self
            .selected_rule_set()
            .and_then(|rs| rs.rule(id))
            .is_some_and(|rule| rule.is_new);
        if is_new {
            self.store.dispatch(Command::DeleteRule(id));
        }
    }

    /// Delete a rule row, gated by the view's confirmation.
    pub fn delete_row(&mut self, id: RuleId, confirm: impl FnOnce() -> bool) {
        if self.store.state().selected.is_none() {
            return;
        }
        if confirm() {
            self.store.dispatch(Command::DeleteRule(id));
        }
    }

    /// The grid's row-commit path: write the edited values through the store.
    pub fn commit_row(&mut self, rule: Rule) {
        self.store.dispatch(Command::UpdateRule(rule));
    }
}
