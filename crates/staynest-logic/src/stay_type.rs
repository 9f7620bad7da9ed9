//! Property-type routing and per-variant configuration.
//!
//! The layout editor behaves identically for every property type; only
//! the shape of a floor's contents and the legal attribute range differ.
//! Those differences live in a single [`VariantConfig`] record so the
//! editor logic is written once and parameterized, instead of being
//! copied per type.
//!
//! | Stay type | Units | Attribute | Range |
//! |-----------|-------|-----------|-------|
//! | Hostel | rooms | beds per room ("sharing") | 1–8 |
//! | Apartment | flats | BHK count | 1–7 |
//! | Commercial | none | floor area (sq.ft) | any positive |
//!
//! The commercial area is deliberately unclamped; the other two ranges
//! are enforced on every write.

use serde::{Deserialize, Serialize};

/// Declared property type from the registration wizard's stay picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StayType {
    Hostel,
    Apartment,
    Commercial,
}

impl StayType {
    /// Resolve a raw picker value to a stay type.
    ///
    /// An empty or unrecognized value yields `None`: the caller renders
    /// no editor rather than failing.
    pub fn parse(raw: &str) -> Option<StayType> {
        match raw {
            "hostel" => Some(StayType::Hostel),
            "apartment" => Some(StayType::Apartment),
            "commercial" => Some(StayType::Commercial),
            _ => None,
        }
    }

    /// The configuration record driving the generic layout editor.
    pub fn variant(self) -> VariantConfig {
        match self {
            StayType::Hostel => VariantConfig {
                unit_label: Some("room"),
                attribute_label: "sharing",
                attribute_range: Some((1, 8)),
                has_units: true,
            },
            StayType::Apartment => VariantConfig {
                unit_label: Some("flat"),
                attribute_label: "BHK",
                attribute_range: Some((1, 7)),
                has_units: true,
            },
            StayType::Commercial => VariantConfig {
                unit_label: None,
                attribute_label: "area",
                attribute_range: None,
                has_units: false,
            },
        }
    }
}

/// Everything that differs between the hostel, apartment, and
/// commercial renditions of the layout editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    /// Human-facing name for a floor's subdivision (`None` for
    /// commercial floors, which have no subdivisions).
    pub unit_label: Option<&'static str>,
    /// Human-facing name for the numeric attribute being edited.
    pub attribute_label: &'static str,
    /// Inclusive clamp range for the attribute, or `None` when any
    /// positive value is accepted.
    pub attribute_range: Option<(u32, u32)>,
    /// Whether floors of this type carry a unit list at all.
    pub has_units: bool,
}
