use serde::{Deserialize, Serialize};

/// A type tag a unit kind carries. Used to look up bonus damage: an
/// attacker that has a `UnitClass -> bonus` entry for one of the target's
/// classes adds that bonus to its attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Cavalry,
    Infantry,
    Spear,
    Archer,
    Castles,
}
