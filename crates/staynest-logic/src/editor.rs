//! The layout editor: one generic, variant-driven state machine.
//!
//! Owns the floor collection plus all transient editing state for the
//! wizard's layout step: a floor-level and a unit-level
//! [`Selection`](crate::selection::Selection), the currently open floor
//! and unit, the open batch modal, and any delete awaiting
//! confirmation. Every method corresponds to one discrete user gesture
//! and completes synchronously; there is no overlapping mutation.
//!
//! Per the editor's error-handling design there are no fatal errors
//! here: invalid text input, stale indices, and gestures that make no
//! sense in the current mode are silently ignored, leaving prior state
//! intact. Destructive bulk deletes are gated behind an explicit
//! two-phase confirmation.

use serde::{Deserialize, Serialize};

use crate::batch;
use crate::floors::{self, Floor};
use crate::selection::{Selection, TapOutcome};
use crate::snapshot::LayoutSnapshot;
use crate::stay_type::{StayType, VariantConfig};

/// Which batch-edit modal is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchModal {
    /// Floor-level: regenerate every selected floor to N units.
    UnitCount,
    /// Floor-level, commercial: set the area on every selected floor.
    Area,
    /// Unit-level: set the attribute on every selected unit.
    Attribute,
}

/// Which collection a pending delete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteTarget {
    Floors,
    Units,
}

/// A bulk delete waiting on the user's yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDelete {
    pub target: DeleteTarget,
    /// Number of items the prompt should name.
    pub count: usize,
}

/// Derived totals for the editor's summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub floor_count: usize,
    /// Total rooms/flats across all floors (zero for commercial).
    pub unit_total: usize,
    /// Commercial floors with an area set.
    pub configured_floors: usize,
}

/// Per-floor counters shown in the unit editor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStats {
    pub unit_count: usize,
    /// Summed attribute: total beds (hostel) or total BHK (apartment).
    pub attribute_total: u32,
}

/// Transient editing state for the wizard's layout step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEditor {
    stay_type: StayType,
    floors: Vec<Floor>,
    floor_selection: Selection,
    unit_selection: Selection,
    open_floor: Option<usize>,
    open_unit: Option<usize>,
    batch_modal: Option<BatchModal>,
    pending_delete: Option<PendingDelete>,
}

impl LayoutEditor {
    pub fn new(stay_type: StayType) -> LayoutEditor {
        LayoutEditor {
            stay_type,
            floors: Vec::new(),
            floor_selection: Selection::new(),
            unit_selection: Selection::new(),
            open_floor: None,
            open_unit: None,
            batch_modal: None,
            pending_delete: None,
        }
    }

    /// Route a raw stay-type value to the matching editor variant.
    ///
    /// Empty or unrecognized values yield `None`; the wizard step
    /// renders no editor in that case rather than failing.
    pub fn for_stay_type(raw: &str) -> Option<LayoutEditor> {
        StayType::parse(raw).map(LayoutEditor::new)
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn stay_type(&self) -> StayType {
        self.stay_type
    }

    /// The configuration record for this editor's stay type.
    pub fn variant(&self) -> VariantConfig {
        self.stay_type.variant()
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor_selection(&self) -> &Selection {
        &self.floor_selection
    }

    pub fn unit_selection(&self) -> &Selection {
        &self.unit_selection
    }

    /// Index of the floor whose unit (or area) editor is open.
    pub fn open_floor(&self) -> Option<usize> {
        self.open_floor
    }

    /// Index of the unit whose attribute stepper is open.
    pub fn open_unit(&self) -> Option<usize> {
        self.open_unit
    }

    pub fn batch_modal(&self) -> Option<BatchModal> {
        self.batch_modal
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending_delete
    }

    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            floor_count: self.floors.len(),
            unit_total: floors::total_units(&self.floors),
            configured_floors: floors::configured_floors(&self.floors),
        }
    }

    pub fn floor_stats(&self, floor_idx: usize) -> Option<FloorStats> {
        self.floors.get(floor_idx).map(|f| FloorStats {
            unit_count: f.units.len(),
            attribute_total: f.attribute_total(),
        })
    }

    /// The serializable end-state handed to the registration wizard.
    /// Pure read; reflects any renumbering from prior deletes.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(self.stay_type, &self.floors)
    }

    // ── Floor collection ───────────────────────────────────────────

    /// Commit the floor-count input. Growing appends empty floors,
    /// shrinking truncates, resizing to the current count preserves
    /// everything. Non-numeric or non-positive input is ignored.
    pub fn set_floor_count(&mut self, raw: &str) -> bool {
        let Some(count) = batch::parse_count(raw) else {
            return false;
        };
        let updated = floors::set_floor_count(&self.floors, count as usize);
        if updated.len() < self.floors.len() {
            // Truncation can strand indices held by the selection and
            // the open floor; drop them rather than let them dangle.
            self.floor_selection.clear();
            if self.open_floor.is_some_and(|idx| idx >= updated.len()) {
                self.close_floor();
            }
        }
        self.floors = updated;
        true
    }

    // ── Floor-level gestures ───────────────────────────────────────

    pub fn long_press_floor(&mut self, index: usize) {
        if index < self.floors.len() {
            self.floor_selection.long_press(index);
        }
    }

    /// Tap a floor card. In selection mode this toggles membership;
    /// otherwise it drills into the floor's unit editor (or area
    /// editor for commercial). Returns `true` when it navigated.
    pub fn tap_floor(&mut self, index: usize) -> bool {
        if index >= self.floors.len() {
            return false;
        }
        match self.floor_selection.tap(index) {
            TapOutcome::Navigate => {
                self.open_floor = Some(index);
                self.open_unit = None;
                self.unit_selection.clear();
                true
            }
            TapOutcome::Selected | TapOutcome::Deselected => false,
        }
    }

    pub fn select_all_floors(&mut self) {
        self.floor_selection.select_all(self.floors.len());
    }

    pub fn cancel_floor_selection(&mut self) {
        self.floor_selection.clear();
    }

    /// Close the open floor's editor, dropping unit-level state.
    pub fn close_floor(&mut self) {
        self.open_floor = None;
        self.open_unit = None;
        self.unit_selection.clear();
        if self.batch_modal == Some(BatchModal::Attribute) {
            self.batch_modal = None;
        }
    }

    // ── Unit-level gestures (open floor required) ──────────────────

    pub fn long_press_unit(&mut self, index: usize) {
        let Some(floor_idx) = self.open_floor else {
            return;
        };
        if !self.variant().has_units {
            return;
        }
        if index < self.floors[floor_idx].units.len() {
            self.unit_selection.long_press(index);
        }
    }

    /// Tap a unit card. In selection mode this toggles membership;
    /// otherwise it opens the unit's attribute stepper, or closes it
    /// when tapping the already-open unit. Returns `true` when it
    /// navigated (stepper toggled).
    pub fn tap_unit(&mut self, index: usize) -> bool {
        let Some(floor_idx) = self.open_floor else {
            return false;
        };
        if !self.variant().has_units || index >= self.floors[floor_idx].units.len() {
            return false;
        }
        match self.unit_selection.tap(index) {
            TapOutcome::Navigate => {
                self.open_unit = if self.open_unit == Some(index) {
                    None
                } else {
                    Some(index)
                };
                true
            }
            TapOutcome::Selected | TapOutcome::Deselected => false,
        }
    }

    pub fn select_all_units(&mut self) {
        if let Some(floor_idx) = self.open_floor {
            self.unit_selection.select_all(self.floors[floor_idx].units.len());
        }
    }

    pub fn cancel_unit_selection(&mut self) {
        self.unit_selection.clear();
    }

    /// Commit the unit-count input for the open floor, replacing its
    /// unit list with fresh defaults (always destructive).
    pub fn set_unit_count(&mut self, raw: &str) -> bool {
        let Some(floor_idx) = self.open_floor else {
            return false;
        };
        if !self.variant().has_units {
            return false;
        }
        let Some(count) = batch::parse_count(raw) else {
            return false;
        };
        self.floors = floors::regenerate_units(&self.floors, floor_idx, count as usize);
        // The old units are gone; unit-level references go with them.
        self.unit_selection.clear();
        self.open_unit = None;
        true
    }

    /// Append one default unit to the open floor.
    pub fn add_unit(&mut self) -> bool {
        let Some(floor_idx) = self.open_floor else {
            return false;
        };
        if !self.variant().has_units {
            return false;
        }
        self.floors = floors::append_unit(&self.floors, floor_idx);
        true
    }

    /// Step the open unit's attribute by `delta`, clamped to the
    /// variant range.
    pub fn adjust_attribute(&mut self, delta: i32) {
        let (Some(floor_idx), Some(unit_idx)) = (self.open_floor, self.open_unit) else {
            return;
        };
        let Some((min, max)) = self.variant().attribute_range else {
            return;
        };
        if let Some(unit) = self
            .floors
            .get_mut(floor_idx)
            .and_then(|f| f.units.get_mut(unit_idx))
        {
            let stepped = (i64::from(unit.attribute) + i64::from(delta))
                .clamp(i64::from(min), i64::from(max));
            unit.attribute = stepped as u32;
        }
    }

    /// Save an area value for the open floor (commercial only).
    /// Closes the floor editor on success; invalid input leaves it
    /// open and the floor untouched.
    pub fn set_floor_area(&mut self, raw: &str) -> bool {
        let Some(floor_idx) = self.open_floor else {
            return false;
        };
        if self.variant().has_units {
            return false;
        }
        let Some(area) = batch::parse_count(raw) else {
            return false;
        };
        self.floors = floors::set_area(&self.floors, floor_idx, area);
        self.close_floor();
        true
    }

    // ── Deletes (confirmation-gated) ───────────────────────────────

    /// Ask to delete the selected floors. Returns the count to name in
    /// the confirmation prompt, or `None` when nothing is selected.
    pub fn request_delete_floors(&mut self) -> Option<usize> {
        if !self.floor_selection.is_active() {
            return None;
        }
        let count = self.floor_selection.count();
        self.pending_delete = Some(PendingDelete {
            target: DeleteTarget::Floors,
            count,
        });
        Some(count)
    }

    /// Ask to delete the selected units of the open floor.
    pub fn request_delete_units(&mut self) -> Option<usize> {
        self.open_floor?;
        if !self.unit_selection.is_active() {
            return None;
        }
        let count = self.unit_selection.count();
        self.pending_delete = Some(PendingDelete {
            target: DeleteTarget::Units,
            count,
        });
        Some(count)
    }

    /// Execute the pending delete: remove the selection's members,
    /// renumber the survivors contiguously from 1, and exit selection
    /// mode. Any open floor/unit reference into the deleted collection
    /// is invalidated.
    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        match pending.target {
            DeleteTarget::Floors => {
                self.floors = floors::delete_floors(&self.floors, self.floor_selection.members());
                self.floor_selection.clear();
                self.close_floor();
            }
            DeleteTarget::Units => {
                if let Some(floor_idx) = self.open_floor {
                    self.floors =
                        floors::delete_units(&self.floors, floor_idx, self.unit_selection.members());
                }
                self.unit_selection.clear();
                self.open_unit = None;
            }
        }
    }

    /// Decline the prompt: drop only the pending delete. Selection
    /// mode and its members persist.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    // ── Batch modals ───────────────────────────────────────────────

    /// Open the floor-level batch modal for the current selection:
    /// unit-count regeneration for hostel/apartment, area for
    /// commercial.
    pub fn open_floor_batch(&mut self) -> Option<BatchModal> {
        if !self.floor_selection.is_active() {
            return None;
        }
        let modal = if self.variant().has_units {
            BatchModal::UnitCount
        } else {
            BatchModal::Area
        };
        self.batch_modal = Some(modal);
        Some(modal)
    }

    /// Open the unit-level batch modal (attribute apply).
    pub fn open_unit_batch(&mut self) -> Option<BatchModal> {
        self.open_floor?;
        if !self.unit_selection.is_active() {
            return None;
        }
        self.batch_modal = Some(BatchModal::Attribute);
        Some(BatchModal::Attribute)
    }

    /// Dismiss the batch modal without applying.
    pub fn close_batch_modal(&mut self) {
        self.batch_modal = None;
    }

    /// Apply the open batch modal's value to every selected item.
    ///
    /// Invalid input returns `false` and leaves the modal open and the
    /// selection intact — nothing is partially applied. On success the
    /// modal closes, the relevant selection mode exits, and `true` is
    /// returned (the caller clears its input buffer).
    pub fn apply_batch(&mut self, raw: &str) -> bool {
        let Some(modal) = self.batch_modal else {
            return false;
        };
        let Some(value) = batch::parse_count(raw) else {
            return false;
        };
        match modal {
            BatchModal::UnitCount => {
                self.floors = batch::apply_unit_count(
                    &self.floors,
                    self.floor_selection.members(),
                    value as usize,
                );
                self.floor_selection.clear();
            }
            BatchModal::Area => {
                self.floors =
                    batch::apply_floor_area(&self.floors, self.floor_selection.members(), value);
                self.floor_selection.clear();
            }
            BatchModal::Attribute => {
                let Some(floor_idx) = self.open_floor else {
                    return false;
                };
                self.floors = batch::apply_unit_attribute(
                    &self.floors,
                    floor_idx,
                    self.unit_selection.members(),
                    value,
                    self.variant().attribute_range,
                );
                self.unit_selection.clear();
            }
        }
        self.batch_modal = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hostel_with_floors(count: &str) -> LayoutEditor {
        let mut editor = LayoutEditor::new(StayType::Hostel);
        assert!(editor.set_floor_count(count));
        editor
    }

    #[test]
    fn router_dispatches_by_stay_type() {
        assert_eq!(
            LayoutEditor::for_stay_type("hostel").map(|e| e.stay_type()),
            Some(StayType::Hostel)
        );
        assert_eq!(
            LayoutEditor::for_stay_type("commercial").map(|e| e.stay_type()),
            Some(StayType::Commercial)
        );
        assert!(LayoutEditor::for_stay_type("").is_none());
        assert!(LayoutEditor::for_stay_type("castle").is_none());
    }

    #[test]
    fn invalid_floor_count_is_ignored() {
        let mut editor = LayoutEditor::new(StayType::Hostel);
        assert!(!editor.set_floor_count("abc"));
        assert!(!editor.set_floor_count("0"));
        assert!(!editor.set_floor_count("-2"));
        assert!(editor.floors().is_empty());
    }

    #[test]
    fn resize_to_same_count_preserves_units() {
        let mut editor = hostel_with_floors("3");
        editor.tap_floor(1);
        editor.set_unit_count("4");
        editor.close_floor();
        let before = editor.floors().to_vec();
        assert!(editor.set_floor_count("3"));
        assert_eq!(editor.floors(), &before[..]);
    }

    #[test]
    fn shrink_drops_selection_and_open_floor() {
        let mut editor = hostel_with_floors("5");
        editor.tap_floor(4);
        assert_eq!(editor.open_floor(), Some(4));
        editor.close_floor();
        editor.long_press_floor(3);
        assert!(editor.set_floor_count("2"));
        assert!(!editor.floor_selection().is_active());
        assert_eq!(editor.floors().len(), 2);
    }

    #[test]
    fn tap_navigates_when_idle_and_selects_in_selection_mode() {
        let mut editor = hostel_with_floors("3");
        assert!(editor.tap_floor(1));
        assert_eq!(editor.open_floor(), Some(1));
        editor.close_floor();

        editor.long_press_floor(0);
        assert!(!editor.tap_floor(1));
        assert!(editor.floor_selection().contains(1));
        // Open floor unchanged by selection taps.
        assert_eq!(editor.open_floor(), None);
    }

    #[test]
    fn deselecting_only_member_exits_selection_mode() {
        let mut editor = hostel_with_floors("3");
        editor.long_press_floor(2);
        assert!(!editor.tap_floor(2));
        assert!(!editor.floor_selection().is_active());
        assert!(editor.floor_selection().members().is_empty());
    }

    #[test]
    fn delete_floors_requires_confirmation() {
        let mut editor = hostel_with_floors("4");
        editor.long_press_floor(0);
        editor.tap_floor(2);
        assert_eq!(editor.request_delete_floors(), Some(2));

        // Declining keeps the selection.
        editor.decline_delete();
        assert!(editor.pending_delete().is_none());
        assert!(editor.floor_selection().is_active());
        assert_eq!(editor.floor_selection().count(), 2);

        // Confirming deletes and renumbers.
        editor.request_delete_floors();
        editor.confirm_delete();
        assert_eq!(editor.floors().len(), 2);
        assert_eq!(editor.floors()[0].floor_number, 1);
        assert_eq!(editor.floors()[1].floor_number, 2);
        assert!(!editor.floor_selection().is_active());
    }

    #[test]
    fn confirm_without_request_is_noop() {
        let mut editor = hostel_with_floors("2");
        editor.confirm_delete();
        assert_eq!(editor.floors().len(), 2);
    }

    #[test]
    fn unit_delete_renumbers_and_derives_display_numbers() {
        let mut editor = hostel_with_floors("3");
        editor.tap_floor(2);
        editor.set_unit_count("3");
        editor.long_press_unit(0);
        editor.tap_unit(1);
        assert_eq!(editor.request_delete_units(), Some(2));
        editor.confirm_delete();

        let floor = &editor.floors()[2];
        assert_eq!(floor.units.len(), 1);
        assert_eq!(floor.units[0].local_number, 1);
        assert_eq!(floor.units[0].display_number(floor.floor_number), 301);
    }

    #[test]
    fn batch_attribute_applies_clamped_and_exits_selection() {
        let mut editor = hostel_with_floors("3");
        editor.tap_floor(1);
        editor.set_unit_count("4");
        editor.long_press_unit(0);
        editor.tap_unit(1);
        assert_eq!(editor.open_unit_batch(), Some(BatchModal::Attribute));
        assert!(editor.apply_batch("99"));

        let attrs: Vec<u32> = editor.floors()[1].units.iter().map(|u| u.attribute).collect();
        assert_eq!(attrs, vec![8, 8, 1, 1]);
        assert!(!editor.unit_selection().is_active());
        assert!(editor.batch_modal().is_none());
    }

    #[test]
    fn batch_apply_invalid_input_leaves_modal_and_selection() {
        let mut editor = hostel_with_floors("3");
        editor.tap_floor(0);
        editor.set_unit_count("2");
        editor.long_press_unit(0);
        editor.open_unit_batch();
        assert!(!editor.apply_batch("abc"));
        assert!(!editor.apply_batch("0"));
        assert_eq!(editor.batch_modal(), Some(BatchModal::Attribute));
        assert!(editor.unit_selection().is_active());
        assert_eq!(editor.floors()[0].units[0].attribute, 1);
    }

    #[test]
    fn floor_batch_regenerates_selected_floors() {
        let mut editor = hostel_with_floors("3");
        editor.long_press_floor(0);
        editor.tap_floor(2);
        assert_eq!(editor.open_floor_batch(), Some(BatchModal::UnitCount));
        assert!(editor.apply_batch("3"));
        assert_eq!(editor.floors()[0].units.len(), 3);
        assert_eq!(editor.floors()[1].units.len(), 0);
        assert_eq!(editor.floors()[2].units.len(), 3);
        assert!(!editor.floor_selection().is_active());
    }

    #[test]
    fn select_all_then_batch_covers_every_floor() {
        let mut editor = hostel_with_floors("4");
        editor.long_press_floor(0);
        editor.select_all_floors();
        assert_eq!(editor.floor_selection().count(), 4);
        editor.open_floor_batch();
        assert!(editor.apply_batch("2"));
        assert!(editor.floors().iter().all(|f| f.units.len() == 2));
    }

    #[test]
    fn stepper_clamps_at_range_edges() {
        let mut editor = hostel_with_floors("1");
        editor.tap_floor(0);
        editor.set_unit_count("1");
        editor.tap_unit(0);
        assert_eq!(editor.open_unit(), Some(0));

        editor.adjust_attribute(-1);
        assert_eq!(editor.floors()[0].units[0].attribute, 1);
        for _ in 0..10 {
            editor.adjust_attribute(1);
        }
        assert_eq!(editor.floors()[0].units[0].attribute, 8);
    }

    #[test]
    fn apartment_stepper_clamps_at_seven() {
        let mut editor = LayoutEditor::new(StayType::Apartment);
        editor.set_floor_count("1");
        editor.tap_floor(0);
        editor.set_unit_count("1");
        editor.tap_unit(0);
        for _ in 0..10 {
            editor.adjust_attribute(1);
        }
        assert_eq!(editor.floors()[0].units[0].attribute, 7);
    }

    #[test]
    fn tapping_open_unit_again_closes_stepper() {
        let mut editor = hostel_with_floors("1");
        editor.tap_floor(0);
        editor.set_unit_count("2");
        editor.tap_unit(1);
        assert_eq!(editor.open_unit(), Some(1));
        editor.tap_unit(1);
        assert_eq!(editor.open_unit(), None);
    }

    #[test]
    fn commercial_floor_tap_opens_area_editor() {
        let mut editor = LayoutEditor::new(StayType::Commercial);
        editor.set_floor_count("2");
        assert!(editor.tap_floor(1));
        assert!(!editor.set_floor_area("abc"));
        assert_eq!(editor.open_floor(), Some(1));

        assert!(editor.set_floor_area("5000"));
        assert_eq!(editor.floors()[1].area, Some(5000));
        // Success closes the floor editor.
        assert_eq!(editor.open_floor(), None);
        assert_eq!(editor.summary().configured_floors, 1);
    }

    #[test]
    fn commercial_batch_area_is_unclamped() {
        let mut editor = LayoutEditor::new(StayType::Commercial);
        editor.set_floor_count("3");
        editor.long_press_floor(0);
        editor.tap_floor(2);
        assert_eq!(editor.open_floor_batch(), Some(BatchModal::Area));
        assert!(editor.apply_batch("99000"));
        assert_eq!(editor.floors()[0].area, Some(99_000));
        assert_eq!(editor.floors()[1].area, None);
        assert_eq!(editor.floors()[2].area, Some(99_000));
    }

    #[test]
    fn commercial_rejects_unit_operations() {
        let mut editor = LayoutEditor::new(StayType::Commercial);
        editor.set_floor_count("2");
        editor.tap_floor(0);
        assert!(!editor.set_unit_count("3"));
        assert!(!editor.add_unit());
        assert!(editor.floors()[0].units.is_empty());
    }

    #[test]
    fn summary_tracks_totals() {
        let mut editor = hostel_with_floors("2");
        editor.tap_floor(0);
        editor.set_unit_count("3");
        editor.close_floor();
        editor.tap_floor(1);
        editor.add_unit();
        let summary = editor.summary();
        assert_eq!(summary.floor_count, 2);
        assert_eq!(summary.unit_total, 4);
        assert_eq!(
            editor.floor_stats(0),
            Some(FloorStats {
                unit_count: 3,
                attribute_total: 3
            })
        );
    }

    #[test]
    fn end_to_end_hostel_scenario() {
        // Set 3 floors, open floor 2, set 4 rooms, select rooms {0,1},
        // apply sharing 3; rooms 2 and 3 keep their defaults.
        let mut editor = hostel_with_floors("3");
        assert!(editor.tap_floor(1));
        assert!(editor.set_unit_count("4"));
        editor.long_press_unit(0);
        editor.tap_unit(1);
        editor.open_unit_batch();
        assert!(editor.apply_batch("3"));

        let attrs: Vec<u32> = editor.floors()[1].units.iter().map(|u| u.attribute).collect();
        assert_eq!(attrs, vec![3, 3, 1, 1]);
        assert!(!editor.unit_selection().is_active());
        assert!(editor.unit_selection().members().is_empty());
    }
}
