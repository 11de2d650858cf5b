use crate::module::{nearest, StrategicModule};
use battlemap::Map;
use units::{Unit, UnitId};

/// Every living unit charges whatever enemy is nearest, heedless of line of
/// sight, cooldown, or unit role.
#[derive(Default)]
pub struct MajorDaft;

impl StrategicModule for MajorDaft {
    fn name(&self) -> &'static str {
        "MajorDaft"
    }

    fn get_targets(&mut self, _map: &Map, own: &[Unit], enemy: &[Unit]) -> Vec<(UnitId, UnitId)> {
        if enemy.is_empty() {
            return Vec::new();
        }
        own.iter()
            .filter_map(|unit| nearest(unit, enemy).map(|target| (unit.id, target.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemap::Position;
    use units::{Side, UnitKind};

    #[test]
    fn every_unit_targets_its_own_nearest_enemy() {
        let a = Unit::new(UnitKind::Knight, Side::A, Position::new(0.0, 0.0));
        let b = Unit::new(UnitKind::Knight, Side::A, Position::new(10.0, 10.0));
        let near_a = Unit::new(UnitKind::Pikeman, Side::B, Position::new(1.0, 0.0));
        let near_b = Unit::new(UnitKind::Pikeman, Side::B, Position::new(9.0, 10.0));

        let mut general = MajorDaft;
        let mut targets = general.get_targets(
            &Map::new(20, 20),
            &[a.clone(), b.clone()],
            &[near_a.clone(), near_b.clone()],
        );
        targets.sort_by_key(|(u, _)| *u);
        let mut expected = vec![(a.id, near_a.id), (b.id, near_b.id)];
        expected.sort_by_key(|(u, _)| *u);
        assert_eq!(targets, expected);
    }

    #[test]
    fn no_targets_when_enemy_army_is_wiped_out() {
        let a = Unit::new(UnitKind::Knight, Side::A, Position::new(0.0, 0.0));
        let mut general = MajorDaft;
        assert!(general.get_targets(&Map::new(20, 20), &[a], &[]).is_empty());
    }
}
