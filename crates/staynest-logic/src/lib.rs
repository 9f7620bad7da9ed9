//! Pure property-layout and registration logic for Staynest.
//!
//! This crate contains the owner-registration wizard and building
//! layout editor logic independent of any UI framework, storage, or
//! network. Functions take plain data and return results, making them
//! unit-testable and portable across the mobile app and any future
//! surface.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stay_type`] | Property-type routing and per-variant configuration |
//! | [`floors`] | Floor/unit data model, pure collection operations, renumbering |
//! | [`selection`] | Generic multi-select state machine (long-press, tap, select-all) |
//! | [`batch`] | Number-pad input parsing and clamped batch application |
//! | [`editor`] | The layout editor: drill-in, batch modals, confirm-gated deletes |
//! | [`snapshot`] | Serializable `floorsData` payload handed to the wizard |
//! | [`wizard`] | Registration steps, field validation, stay-type switch semantics |

pub mod batch;
pub mod editor;
pub mod floors;
pub mod selection;
pub mod snapshot;
pub mod stay_type;
pub mod wizard;
