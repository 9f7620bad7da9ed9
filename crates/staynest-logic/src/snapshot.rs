//! Serializable end-state of the layout editor.
//!
//! When the owner finishes the layout step, the editor's floors are
//! captured into a [`LayoutSnapshot`] and handed to the enclosing
//! registration wizard as the `floorsData` part of its payload. The
//! snapshot is a pure read of the in-memory state at capture time —
//! display numbers are recomputed from position, so any renumbering
//! from earlier deletes is already reflected.
//!
//! JSON field names are camelCase to match the payload the mobile
//! wizard submits.

use serde::{Deserialize, Serialize};

use crate::floors::Floor;
use crate::stay_type::StayType;

/// One captured room or flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSnapshot {
    pub local_number: u32,
    /// `floor_number * 100 + local_number`, derived at capture time.
    pub display_number: u32,
    /// Beds per room or BHK count.
    pub attribute: u32,
}

/// One captured floor: unit-bearing for hostel/apartment, area-bearing
/// for commercial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase", untagged)]
pub enum FloorSnapshot {
    Units {
        floor_number: u32,
        units: Vec<UnitSnapshot>,
    },
    Area {
        floor_number: u32,
        /// `None` when the owner never set an area for this floor.
        area: Option<u32>,
    },
}

impl FloorSnapshot {
    pub fn floor_number(&self) -> u32 {
        match self {
            FloorSnapshot::Units { floor_number, .. } => *floor_number,
            FloorSnapshot::Area { floor_number, .. } => *floor_number,
        }
    }
}

/// The full ordered floor structure at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub stay_type: StayType,
    pub floors: Vec<FloorSnapshot>,
}

impl LayoutSnapshot {
    /// Capture the current floors without mutating them.
    pub fn capture(stay_type: StayType, floors: &[Floor]) -> LayoutSnapshot {
        let has_units = stay_type.variant().has_units;
        let floors = floors
            .iter()
            .map(|floor| {
                if has_units {
                    FloorSnapshot::Units {
                        floor_number: floor.floor_number,
                        units: floor
                            .units
                            .iter()
                            .map(|unit| UnitSnapshot {
                                local_number: unit.local_number,
                                display_number: unit.display_number(floor.floor_number),
                                attribute: unit.attribute,
                            })
                            .collect(),
                    }
                } else {
                    FloorSnapshot::Area {
                        floor_number: floor.floor_number,
                        area: floor.area,
                    }
                }
            })
            .collect();
        LayoutSnapshot { stay_type, floors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::LayoutEditor;

    #[test]
    fn hostel_snapshot_carries_units_and_display_numbers() {
        let mut editor = LayoutEditor::new(StayType::Hostel);
        editor.set_floor_count("3");
        editor.tap_floor(2);
        editor.set_unit_count("2");
        let snap = editor.snapshot();

        assert_eq!(snap.stay_type, StayType::Hostel);
        assert_eq!(snap.floors.len(), 3);
        match &snap.floors[2] {
            FloorSnapshot::Units { floor_number, units } => {
                assert_eq!(*floor_number, 3);
                assert_eq!(units[1].display_number, 302);
                assert_eq!(units[1].attribute, 1);
            }
            other => panic!("expected unit floor, got {other:?}"),
        }
    }

    #[test]
    fn commercial_snapshot_carries_optional_areas() {
        let mut editor = LayoutEditor::new(StayType::Commercial);
        editor.set_floor_count("2");
        editor.tap_floor(0);
        editor.set_floor_area("750");
        let snap = editor.snapshot();

        assert_eq!(
            snap.floors[0],
            FloorSnapshot::Area {
                floor_number: 1,
                area: Some(750)
            }
        );
        assert_eq!(
            snap.floors[1],
            FloorSnapshot::Area {
                floor_number: 2,
                area: None
            }
        );
    }

    #[test]
    fn snapshot_reflects_renumbering_after_delete() {
        let mut editor = LayoutEditor::new(StayType::Hostel);
        editor.set_floor_count("4");
        editor.long_press_floor(0);
        editor.tap_floor(2);
        editor.request_delete_floors();
        editor.confirm_delete();

        let numbers: Vec<u32> = editor
            .snapshot()
            .floors
            .iter()
            .map(|f| f.floor_number())
            .collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn json_shape_is_camel_case() {
        let mut editor = LayoutEditor::new(StayType::Hostel);
        editor.set_floor_count("1");
        editor.tap_floor(0);
        editor.set_unit_count("1");
        let json = serde_json::to_value(editor.snapshot()).unwrap();

        assert_eq!(json["floors"][0]["floorNumber"], 1);
        assert_eq!(json["floors"][0]["units"][0]["displayNumber"], 101);
        assert!(json["floors"][0].get("area").is_none());
    }

    #[test]
    fn commercial_json_has_area_and_no_units() {
        let mut editor = LayoutEditor::new(StayType::Commercial);
        editor.set_floor_count("1");
        let json = serde_json::to_value(editor.snapshot()).unwrap();
        assert_eq!(json["floors"][0]["area"], serde_json::Value::Null);
        assert!(json["floors"][0].get("units").is_none());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut editor = LayoutEditor::new(StayType::Apartment);
        editor.set_floor_count("2");
        editor.tap_floor(0);
        editor.set_unit_count("3");
        let snap = editor.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: LayoutSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
