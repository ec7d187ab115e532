//! Per-row edit state for the rules grid.
//!
//! Tracks which grid row, if any, is being edited inline. This is deliberately
//! independent from the store's set-level edit mode: a whole edit session can
//! be open while every individual row sits in view mode.

use std::collections::HashMap;

use crate::types::RuleId;

/// Edit state of a single grid row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    View,
    Edit,
}

/// A row's mode plus the cancellation flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    pub mode: RowMode,
    /// Set when the row returned to view via cancel: staged cell edits are to
    /// be thrown away rather than committed.
    pub ignore_modifications: bool,
}

/// Mapping from rule row id to edit state. Rows absent from the map are in
/// view mode.
#[derive(Debug, Clone, Default)]
pub struct RowModes {
    rows: HashMap<RuleId, RowState>,
}

impl RowModes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a row; absent rows read as view mode.
    #[must_use]
    pub fn state_of(&self, id: RuleId) -> RowState {
        self.rows.get(&id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn mode_of(&self, id: RuleId) -> RowMode {
        self.state_of(id).mode
    }

    /// The row currently in edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<RuleId> {
        self.rows
            .iter()
            .find(|(_, state)| state.mode == RowMode::Edit)
            .map(|(id, _)| *id)
    }

    /// Put `id` in edit mode, forcing every other row back to view mode.
    /// There is never more than one concurrent row editor.
    pub fn enter_edit(&mut self, id: RuleId) {
        for state in self.rows.values_mut() {
            *state = RowState::default();
        }
        self.rows.insert(
            id,
            RowState {
                mode: RowMode::Edit,
                ignore_modifications: false,
            },
        );
    }

    /// Return `id` to view mode, keeping its staged edits for commit.
    pub fn save(&mut self, id: RuleId) {
        self.rows.insert(id, RowState::default());
    }

    /// Return `id` to view mode, discarding staged edits.
    pub fn cancel(&mut self, id: RuleId) {
        self.rows.insert(
            id,
            RowState {
                mode: RowMode::View,
                ignore_modifications: true,
            },
        );
    }

    /// Drop all row state; everything reads as view mode again.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
