use crate::army::Army;
use crate::error::BattleError;
use battlemap::Map;
use combat::footprints_overlap;
use units::Unit;

/// Check the post-conditions that must hold after every tick: hp and
/// cooldown stay non-negative and in range, living units stay in bounds,
/// no two living units of the same army overlap each other or an obstacle,
/// and every unit's side tag matches the army holding it. A violation here
/// is always a bug in the resolver, never a recoverable condition, so the
/// caller treats it as fatal.
pub fn check(map: &Map, army_a: &Army, army_b: &Army) -> Result<(), BattleError> {
    for army in [army_a, army_b] {
        for unit in army.units() {
            check_unit(unit, army, map)?;
        }
        check_no_overlaps(army.units(), map)?;
    }
    Ok(())
}

fn check_unit(unit: &Unit, army: &Army, map: &Map) -> Result<(), BattleError> {
    if unit.hp < 0 || unit.hp > unit.max_hp {
        return Err(BattleError::InvariantBreach(format!(
            "unit {} has hp {} outside [0, {}]",
            unit.id, unit.hp, unit.max_hp
        )));
    }
    if unit.cooldown < 0 {
        return Err(BattleError::InvariantBreach(format!(
            "unit {} has negative cooldown {}",
            unit.id, unit.cooldown
        )));
    }
    if unit.side != army.side() {
        return Err(BattleError::InvariantBreach(format!(
            "unit {} is held by army {:?} but tagged side {:?}",
            unit.id,
            army.side(),
            unit.side
        )));
    }
    if unit.is_alive() && !map.in_bounds(&unit.position) {
        return Err(BattleError::InvariantBreach(format!(
            "living unit {} at ({:.3}, {:.3}) is out of map bounds",
            unit.id, unit.position.x, unit.position.y
        )));
    }
    Ok(())
}

fn check_no_overlaps(units: &[Unit], map: &Map) -> Result<(), BattleError> {
    let living: Vec<&Unit> = units.iter().filter(|u| u.is_alive()).collect();

    for (i, unit) in living.iter().enumerate() {
        for other in living[i + 1..].iter() {
            if footprints_overlap(unit.position, unit.size, other.position, other.size) {
                return Err(BattleError::InvariantBreach(format!(
                    "allied units {} and {} overlap footprints",
                    unit.id, other.id
                )));
            }
        }

        for obstacle in map.obstacles() {
            if footprints_overlap(unit.position, unit.size, obstacle.position, obstacle.size) {
                return Err(BattleError::InvariantBreach(format!(
                    "unit {} overlaps an obstacle at ({:.3}, {:.3})",
                    unit.id, obstacle.position.x, obstacle.position.y
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemap::{Obstacle, Position};
    use generals::MajorDaft;
    use units::{Side, UnitKind};

    fn army_with(side: Side, unit: Unit) -> Army {
        let mut army = Army::new(side, Box::new(MajorDaft));
        army.add_unit(unit);
        army
    }

    #[test]
    fn passes_for_a_normal_two_unit_battlefield() {
        let map = Map::new(20, 20);
        let army_a = army_with(Side::A, Unit::new(UnitKind::Knight, Side::A, Position::new(2.0, 2.0)));
        let army_b = army_with(Side::B, Unit::new(UnitKind::Knight, Side::B, Position::new(18.0, 18.0)));
        assert!(check(&map, &army_a, &army_b).is_ok());
    }

    #[test]
    fn flags_hp_above_max_hp() {
        let map = Map::new(20, 20);
        let mut bloated = Unit::new(UnitKind::Knight, Side::A, Position::new(2.0, 2.0));
        bloated.hp = bloated.max_hp + 1;
        let army_a = army_with(Side::A, bloated);
        let army_b = army_with(Side::B, Unit::new(UnitKind::Knight, Side::B, Position::new(18.0, 18.0)));
        assert!(matches!(check(&map, &army_a, &army_b), Err(BattleError::InvariantBreach(_))));
    }

    #[test]
    fn flags_a_unit_that_wandered_out_of_bounds() {
        let map = Map::new(20, 20);
        let stray = Unit::new(UnitKind::Knight, Side::A, Position::new(25.0, 2.0));
        let army_a = army_with(Side::A, stray);
        let army_b = army_with(Side::B, Unit::new(UnitKind::Knight, Side::B, Position::new(18.0, 18.0)));
        assert!(matches!(check(&map, &army_a, &army_b), Err(BattleError::InvariantBreach(_))));
    }

    #[test]
    fn flags_two_allied_units_with_overlapping_footprints() {
        let map = Map::new(20, 20);
        let mut army_a = Army::new(Side::A, Box::new(MajorDaft));
        army_a.add_unit(Unit::new(UnitKind::Knight, Side::A, Position::new(5.0, 5.0)));
        army_a.add_unit(Unit::new(UnitKind::Knight, Side::A, Position::new(5.1, 5.0)));
        let army_b = army_with(Side::B, Unit::new(UnitKind::Knight, Side::B, Position::new(18.0, 18.0)));
        assert!(matches!(check(&map, &army_a, &army_b), Err(BattleError::InvariantBreach(_))));
    }

    #[test]
    fn flags_a_unit_sitting_inside_an_obstacle() {
        let map = Map::with_obstacles(20, 20, vec![Obstacle::new(Position::new(5.0, 5.0), 1.0)]);
        let army_a = army_with(Side::A, Unit::new(UnitKind::Knight, Side::A, Position::new(5.0, 5.0)));
        let army_b = army_with(Side::B, Unit::new(UnitKind::Knight, Side::B, Position::new(18.0, 18.0)));
        assert!(matches!(check(&map, &army_a, &army_b), Err(BattleError::InvariantBreach(_))));
    }
}
