//! Floor and unit data model with pure collection operations.
//!
//! A building is an ordered list of [`Floor`]s; each floor carries an
//! ordered list of [`Unit`]s (rooms or flats) or, for commercial
//! properties, a single optional area value instead. Numbering is
//! positional and contiguous: `floor_number` always equals array
//! position + 1, and the same rule holds for `local_number` within a
//! floor. Every structural change (insert, delete, truncate) renumbers
//! so the invariant survives.
//!
//! All operations here are pure: they take a slice and return a new
//! `Vec`, never mutating in place. Invalid input (out-of-range indices,
//! zero counts) returns the input unchanged — the editor treats bad
//! gestures as no-ops, not errors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Attribute value given to every freshly created unit.
pub const DEFAULT_ATTRIBUTE: u32 = 1;

/// A room or flat belonging to a floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// 1-based position within the owning floor, contiguous.
    pub local_number: u32,
    /// Beds per room (hostel) or BHK count (apartment).
    pub attribute: u32,
}

impl Unit {
    fn new(local_number: u32) -> Unit {
        Unit {
            local_number,
            attribute: DEFAULT_ATTRIBUTE,
        }
    }

    /// Human-facing number: floor 3, unit 2 → 302.
    ///
    /// Derived from position on every call, never stored, so it tracks
    /// renumbering after deletes.
    pub fn display_number(&self, floor_number: u32) -> u32 {
        floor_number * 100 + self.local_number
    }
}

/// One floor of the building being registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// 1-based position in the building, contiguous.
    pub floor_number: u32,
    /// Rooms or flats on this floor. Always empty for commercial
    /// floors.
    pub units: Vec<Unit>,
    /// Floor area in sq.ft. Only used by the commercial variant;
    /// `None` until the owner sets it.
    pub area: Option<u32>,
}

impl Floor {
    fn new(floor_number: u32) -> Floor {
        Floor {
            floor_number,
            units: Vec::new(),
            area: None,
        }
    }

    /// Sum of unit attributes on this floor (total beds for a hostel
    /// floor, total BHK for an apartment floor).
    pub fn attribute_total(&self) -> u32 {
        self.units.iter().map(|u| u.attribute).sum()
    }
}

/// Grow or shrink the floor list to exactly `count` floors.
///
/// Growing appends empty floors numbered after the existing ones;
/// shrinking truncates from the end. Resizing to the current length is
/// a strict no-op that preserves every floor's units — this is the
/// deliberate non-destructive update path. `count == 0` is rejected
/// (returns the input unchanged).
pub fn set_floor_count(floors: &[Floor], count: usize) -> Vec<Floor> {
    if count == 0 || count == floors.len() {
        return floors.to_vec();
    }
    if count > floors.len() {
        let mut grown = floors.to_vec();
        for n in floors.len()..count {
            grown.push(Floor::new(n as u32 + 1));
        }
        return grown;
    }
    // Retained floors already hold positions 1..=count.
    floors[..count].to_vec()
}

/// Replace a floor's unit list with exactly `count` fresh units.
///
/// Always destructive: prior per-unit attribute values are discarded,
/// unlike the floor-count no-op rule. Invalid `floor_idx` or a zero
/// count leaves the input unchanged.
pub fn regenerate_units(floors: &[Floor], floor_idx: usize, count: usize) -> Vec<Floor> {
    if count == 0 || floor_idx >= floors.len() {
        return floors.to_vec();
    }
    let mut updated = floors.to_vec();
    updated[floor_idx].units = (1..=count as u32).map(Unit::new).collect();
    updated
}

/// Append a single default unit to a floor, numbered after the
/// existing ones. Never touches existing units.
pub fn append_unit(floors: &[Floor], floor_idx: usize) -> Vec<Floor> {
    if floor_idx >= floors.len() {
        return floors.to_vec();
    }
    let mut updated = floors.to_vec();
    let next = updated[floor_idx].units.len() as u32 + 1;
    updated[floor_idx].units.push(Unit::new(next));
    updated
}

/// Remove the floors at `selected` indices and renumber the remainder
/// contiguously from 1.
pub fn delete_floors(floors: &[Floor], selected: &BTreeSet<usize>) -> Vec<Floor> {
    let mut remaining: Vec<Floor> = floors
        .iter()
        .enumerate()
        .filter(|(idx, _)| !selected.contains(idx))
        .map(|(_, f)| f.clone())
        .collect();
    for (pos, floor) in remaining.iter_mut().enumerate() {
        floor.floor_number = pos as u32 + 1;
    }
    remaining
}

/// Remove the units at `selected` indices within one floor and
/// renumber the survivors contiguously from 1.
pub fn delete_units(floors: &[Floor], floor_idx: usize, selected: &BTreeSet<usize>) -> Vec<Floor> {
    if floor_idx >= floors.len() {
        return floors.to_vec();
    }
    let mut updated = floors.to_vec();
    let mut remaining: Vec<Unit> = updated[floor_idx]
        .units
        .iter()
        .enumerate()
        .filter(|(idx, _)| !selected.contains(idx))
        .map(|(_, u)| u.clone())
        .collect();
    for (pos, unit) in remaining.iter_mut().enumerate() {
        unit.local_number = pos as u32 + 1;
    }
    updated[floor_idx].units = remaining;
    updated
}

/// Set the area value on one floor (commercial variant).
pub fn set_area(floors: &[Floor], floor_idx: usize, area: u32) -> Vec<Floor> {
    if floor_idx >= floors.len() {
        return floors.to_vec();
    }
    let mut updated = floors.to_vec();
    updated[floor_idx].area = Some(area);
    updated
}

/// Total unit count across all floors.
pub fn total_units(floors: &[Floor]) -> usize {
    floors.iter().map(|f| f.units.len()).sum()
}

/// Number of floors with an area value set (commercial "configured"
/// counter).
pub fn configured_floors(floors: &[Floor]) -> usize {
    floors.iter().filter(|f| f.area.is_some()).count()
}
