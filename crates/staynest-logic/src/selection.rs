//! Generic multi-select state machine.
//!
//! Used at both levels of the layout editor: over the floor grid and
//! over the unit grid of an open floor. Two states:
//!
//! - **Idle**: taps mean "drill in" (open the floor, or toggle a unit's
//!   attribute stepper) and are reported as [`TapOutcome::Navigate`]
//!   without touching the selection.
//! - **Selecting**: taps toggle membership in the batch-operation set.
//!
//! A long-press always (re)starts selection with exactly the pressed
//! index. Deselecting the last member drops back to Idle automatically;
//! a bulk clear via [`Selection::clear`] does the same unconditionally.
//!
//! The same gesture meaning different things depending on mode is a
//! core usability contract of the editor, so the mode decision lives
//! here in one transition table rather than at every call site.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What a tap did, given the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Selection was idle: the caller should navigate into the item.
    Navigate,
    /// The index was added to the selection.
    Selected,
    /// The index was removed; selection mode may have auto-exited.
    Deselected,
}

/// Multi-select state over one indexed collection.
///
/// Invariant: `members` is non-empty exactly when selection mode is
/// active. Indices are unique and unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    active: bool,
    members: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// Whether selection mode is engaged.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The selected indices.
    pub fn members(&self) -> &BTreeSet<usize> {
        &self.members
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Number of selected items (the count named in delete prompts).
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Enter selection mode holding exactly `index`.
    ///
    /// A long-press during an existing selection restarts it: any prior
    /// members are replaced, matching the source gesture handling.
    pub fn long_press(&mut self, index: usize) {
        self.active = true;
        self.members = BTreeSet::from([index]);
    }

    /// Handle a tap on `index`.
    ///
    /// Idle → [`TapOutcome::Navigate`], selection untouched. Selecting →
    /// toggle membership; removing the last member auto-exits to Idle.
    pub fn tap(&mut self, index: usize) -> TapOutcome {
        if !self.active {
            return TapOutcome::Navigate;
        }
        if self.members.remove(&index) {
            if self.members.is_empty() {
                self.active = false;
            }
            TapOutcome::Deselected
        } else {
            self.members.insert(index);
            TapOutcome::Selected
        }
    }

    /// Select every index in `0..len`. A no-op for an empty collection
    /// (selection mode cannot hold zero members).
    pub fn select_all(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.active = true;
        self.members = (0..len).collect();
    }

    /// Cancel: clear all members and return to Idle unconditionally.
    pub fn clear(&mut self) {
        self.active = false;
        self.members.clear();
    }
}
