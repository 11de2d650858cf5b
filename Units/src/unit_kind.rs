use crate::unit_class::UnitClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The tagged variant a `Unit` is stamped with at creation. Determines the
/// immutable stat block; everything else on `Unit` is mutable runtime state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Knight,
    Pikeman,
    Crossbowman,
    Monk,
    Elephant,
    Castle,
}

/// The authoritative, fixed-per-kind stat block.
#[derive(Clone, Debug)]
pub struct Stats {
    pub max_hp: i32,
    pub attack: i32,
    pub armor: i32,
    pub speed: f64,
    pub range: f64,
    /// Range Monks use in place of `range` when the target is an Elephant
    /// or a Castle ("conversion works close"). Unused by other kinds.
    pub convert_range: f64,
    pub reload_time: i32,
    pub line_of_sight: f64,
    pub size: f64,
    pub classes: Vec<UnitClass>,
    pub bonuses: HashMap<UnitClass, i32>,
}

impl UnitKind {
    /// Look up this kind's fixed stat block from the catalog.
    pub fn stats(self) -> Stats {
        match self {
            UnitKind::Knight => Stats {
                max_hp: 100,
                attack: 10,
                armor: 2,
                speed: 2.0,
                range: 1.0,
                convert_range: 1.0,
                reload_time: 2,
                line_of_sight: 4.0,
                size: 1.0,
                classes: vec![UnitClass::Cavalry],
                bonuses: HashMap::from([(UnitClass::Infantry, 2)]),
            },
            UnitKind::Pikeman => Stats {
                max_hp: 55,
                attack: 4,
                armor: 0,
                speed: 1.0,
                range: 1.0,
                convert_range: 1.0,
                reload_time: 3,
                line_of_sight: 6.0,
                size: 1.0,
                classes: vec![UnitClass::Infantry, UnitClass::Spear],
                bonuses: HashMap::from([(UnitClass::Cavalry, 10)]),
            },
            UnitKind::Crossbowman => Stats {
                max_hp: 35,
                attack: 6,
                armor: 0,
                speed: 1.0,
                range: 5.0,
                convert_range: 5.0,
                reload_time: 2,
                line_of_sight: 7.0,
                size: 1.0,
                classes: vec![UnitClass::Archer],
                bonuses: HashMap::from([(UnitClass::Spear, 3)]),
            },
            UnitKind::Monk => Stats {
                max_hp: 30,
                attack: 4,
                armor: 0,
                speed: 1.0,
                range: 9.0,
                // Conversion only reaches this far; melee-close.
                convert_range: 1.0,
                reload_time: 62,
                line_of_sight: 11.0,
                size: 1.0,
                classes: Vec::new(),
                bonuses: HashMap::new(),
            },
            UnitKind::Elephant => Stats {
                max_hp: 300,
                attack: 14,
                armor: 2,
                speed: 1.0,
                range: 1.0,
                convert_range: 1.0,
                reload_time: 2,
                line_of_sight: 8.0,
                size: 2.0,
                classes: vec![UnitClass::Cavalry],
                bonuses: HashMap::from([(UnitClass::Castles, 7)]),
            },
            UnitKind::Castle => Stats {
                max_hp: 4800,
                attack: 55,
                armor: 9,
                speed: 0.0,
                range: 8.0,
                convert_range: 8.0,
                reload_time: 2,
                line_of_sight: 11.0,
                size: 5.0,
                classes: vec![UnitClass::Castles],
                bonuses: HashMap::new(),
            },
        }
    }
}
