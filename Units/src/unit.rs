use crate::unit_class::UnitClass;
use crate::unit_kind::{Stats, UnitKind};
use battlemap::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity for a unit, used as a handle instead of an owning
/// reference so armies can hold units by value while strategic modules and
/// `last_attacker`/`last_attacked` refer to them without borrow-checker
/// fights over who owns whom.
pub type UnitId = Uuid;

/// Which army currently owns a unit, standing in for an owning
/// back-reference to the Army: the resolver only ever needs to know which
/// side a unit is on (to clamp to map bounds and for observability), never
/// to reach back into that army's internals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A small, serializable view of a unit suitable for persistence or an
/// observer that only needs the headline numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub kind: UnitKind,
    pub hp: i32,
    pub max_hp: i32,
    pub position: Position,
    pub cooldown: i32,
    pub side: Side,
}

/// A combatant. `kind` and the derived `stats` are fixed at creation;
/// everything else is mutable state advanced by the battle engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub side: Side,
    pub position: Position,

    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub armor: i32,
    pub speed: f64,
    pub range: f64,
    pub convert_range: f64,
    pub reload_time: i32,
    pub line_of_sight: f64,
    pub size: f64,
    pub classes: Vec<UnitClass>,
    #[serde(with = "bonus_map_as_vec")]
    pub bonuses: std::collections::HashMap<UnitClass, i32>,

    /// Ticks remaining until this unit may strike or convert again.
    pub cooldown: i32,

    /// The unit (if any) that most recently dealt damage to this unit.
    /// Reactive strategic modules use this to retaliate. Not actively
    /// cleared when the attacker dies: callers consult a living-units list
    /// and treat a dead id as absent (matching the original engine's
    /// `last_attacker in enemy_units` membership check).
    pub last_attacker: Option<UnitId>,

    /// This unit's most recent target of any action kind. Role-based
    /// strategic modules use this to keep re-engaging a chosen target.
    pub last_attacked: Option<UnitId>,
}

impl Unit {
    pub fn new(kind: UnitKind, side: Side, position: Position) -> Self {
        let Stats {
            max_hp,
            attack,
            armor,
            speed,
            range,
            convert_range,
            reload_time,
            line_of_sight,
            size,
            classes,
            bonuses,
        } = kind.stats();

        Self {
            id: Uuid::new_v4(),
            kind,
            side,
            position,
            hp: max_hp,
            max_hp,
            attack,
            armor,
            speed,
            range,
            convert_range,
            reload_time,
            line_of_sight,
            size,
            classes,
            bonuses,
            cooldown: 0,
            last_attacker: None,
            last_attacked: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, clamping hp at 0 so it never goes negative. Returns
    /// the damage actually absorbed (never more than remaining hp).
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let applied = amount.max(0).min(self.hp);
        self.hp -= applied;
        applied
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f64 / self.max_hp as f64
        }
    }

    /// Bonus damage this unit deals against a target carrying any of
    /// `target_classes`: the sum of this unit's bonus entry for each class
    /// the target belongs to (zero for classes with no entry).
    pub fn bonus_against(&self, target_classes: &[UnitClass]) -> i32 {
        target_classes
            .iter()
            .filter_map(|c| self.bonuses.get(c))
            .sum()
    }

    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            kind: self.kind,
            hp: self.hp,
            max_hp: self.max_hp,
            position: self.position,
            cooldown: self.cooldown,
            side: self.side,
        }
    }

    /// One-line human-readable summary, for observers that just want to
    /// print state without a full renderer.
    pub fn describe(&self) -> String {
        format!(
            "{:?}[{}] hp={}/{} pos=({:.1},{:.1}) cd={}",
            self.kind,
            &self.id.to_string()[..8],
            self.hp,
            self.max_hp,
            self.position.x,
            self.position.y,
            self.cooldown
        )
    }
}

mod bonus_map_as_vec {
    use super::UnitClass;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S: Serializer>(
        map: &HashMap<UnitClass, i32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<(UnitClass, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<UnitClass, i32>, D::Error> {
        let entries = Vec::<(UnitClass, i32)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_unit_starts_at_full_health_with_no_cooldown() {
        let u = Unit::new(UnitKind::Knight, Side::A, Position::zero());
        assert_eq!(u.hp, u.max_hp);
        assert_eq!(u.cooldown, 0);
        assert!(u.is_alive());
    }

    #[test]
    fn take_damage_clamps_at_zero() {
        let mut u = Unit::new(UnitKind::Pikeman, Side::A, Position::zero());
        u.take_damage(10_000);
        assert_eq!(u.hp, 0);
        assert!(!u.is_alive());
    }

    #[test]
    fn heal_does_not_exceed_max_hp() {
        let mut u = Unit::new(UnitKind::Monk, Side::A, Position::zero());
        u.hp = 5;
        u.heal(1_000);
        assert_eq!(u.hp, u.max_hp);
    }

    #[test]
    fn bonus_against_sums_matching_classes_only() {
        let pikeman = Unit::new(UnitKind::Pikeman, Side::A, Position::zero());
        let knight_classes = vec![UnitClass::Cavalry];
        assert_eq!(pikeman.bonus_against(&knight_classes), 10);
        let monk_classes: Vec<UnitClass> = vec![];
        assert_eq!(pikeman.bonus_against(&monk_classes), 0);
    }
}
