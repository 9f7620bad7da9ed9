//! Numeric input parsing and batch application over a selection.
//!
//! Every count and attribute in the editor arrives as free text from a
//! number-pad field. [`parse_count`] mirrors the source's `parseInt`
//! semantics (leading whitespace, optional sign, trailing garbage
//! ignored) and rejects anything that does not resolve to a positive
//! integer; callers treat rejection as a silent no-op and leave their
//! modal open.
//!
//! The apply functions set one value on every member of the current
//! selection in a single pass, clamped to the variant's range where one
//! exists. They are pure in the same style as [`crate::floors`]: slice
//! in, new `Vec` out.

use std::collections::BTreeSet;

use crate::floors::{self, Floor};

/// Parse a number-pad string as a positive integer.
///
/// Skips leading whitespace, accepts an optional `+`/`-`, consumes
/// leading decimal digits, and ignores the rest (`"12abc"` → 12).
/// Returns `None` when no digits are present or the value is not
/// strictly positive.
pub fn parse_count(raw: &str) -> Option<u32> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return None;
    }
    // Saturate absurdly long inputs instead of failing the parse.
    let value = digits.parse::<u64>().unwrap_or(u64::from(u32::MAX));
    let value = u32::try_from(value).unwrap_or(u32::MAX);
    (value > 0).then_some(value)
}

/// Clamp `value` to an inclusive range, or pass it through when the
/// variant carries no range (commercial area).
pub fn clamp_attribute(value: u32, range: Option<(u32, u32)>) -> u32 {
    match range {
        Some((min, max)) => value.clamp(min, max),
        None => value,
    }
}

/// Set the attribute on every selected unit of one floor, clamped to
/// `range`. Out-of-range unit indices in the selection are skipped.
pub fn apply_unit_attribute(
    floors: &[Floor],
    floor_idx: usize,
    selected: &BTreeSet<usize>,
    value: u32,
    range: Option<(u32, u32)>,
) -> Vec<Floor> {
    if floor_idx >= floors.len() {
        return floors.to_vec();
    }
    let clamped = clamp_attribute(value, range);
    let mut updated = floors.to_vec();
    for &idx in selected {
        if let Some(unit) = updated[floor_idx].units.get_mut(idx) {
            unit.attribute = clamped;
        }
    }
    updated
}

/// Regenerate every selected floor to exactly `count` default units.
///
/// The floor-level batch action: destructive per floor, exactly like
/// [`floors::regenerate_units`] applied across the selection.
pub fn apply_unit_count(floors: &[Floor], selected: &BTreeSet<usize>, count: usize) -> Vec<Floor> {
    let mut updated = floors.to_vec();
    for &idx in selected {
        updated = floors::regenerate_units(&updated, idx, count);
    }
    updated
}

/// Set the area on every selected floor (commercial; unclamped).
pub fn apply_floor_area(floors: &[Floor], selected: &BTreeSet<usize>, area: u32) -> Vec<Floor> {
    let mut updated = floors.to_vec();
    for &idx in selected {
        updated = floors::set_area(&updated, idx, area);
    }
    updated
}
