//! # units
//!
//! The combatant data model: a per-kind stat catalog (`UnitKind::stats`),
//! the mutable `Unit` state it stamps out, and the type tags (`UnitClass`)
//! that drive damage bonuses. Contains no combat math and no turn logic —
//! those live in the `combat` and `battle` crates respectively, keeping
//! stat/state definitions separate from the calculations performed on them.

mod unit;
mod unit_class;
mod unit_kind;

pub use unit::{Side, Unit, UnitId, UnitSnapshot};
pub use unit_class::UnitClass;
pub use unit_kind::{Stats, UnitKind};
