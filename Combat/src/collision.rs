use battlemap::{Map, Position};
use units::{Unit, UnitKind};

/// Circular footprints: a unit occupies a disc of radius `size / 2`
/// centered on its position. Two footprints collide when the distance
/// between centers is less than the sum of their radii. Circles are used
/// uniformly everywhere rather than mixing in axis-aligned boxes, so one
/// overlap test covers unit-unit and unit-obstacle collision alike.
pub fn footprints_overlap(a_pos: Position, a_size: f64, b_pos: Position, b_size: f64) -> bool {
    let r = a_size / 2.0 + b_size / 2.0;
    a_pos.distance_squared(&b_pos) < r * r
}

/// Would `unit` moving to `candidate_position` collide with any living
/// allied unit, any living enemy unit (unless `unit` is an Elephant, which
/// tramples through enemy footprints), or any obstacle?
pub fn would_collide(
    unit: &Unit,
    candidate_position: Position,
    allies: &[Unit],
    enemies: &[Unit],
    map: &Map,
) -> bool {
    let allied_collision = allies.iter().any(|ally| {
        ally.id != unit.id
            && ally.is_alive()
            && footprints_overlap(candidate_position, unit.size, ally.position, ally.size)
    });
    if allied_collision {
        return true;
    }

    if unit.kind != UnitKind::Elephant {
        let enemy_collision = enemies.iter().any(|enemy| {
            enemy.is_alive()
                && footprints_overlap(candidate_position, unit.size, enemy.position, enemy.size)
        });
        if enemy_collision {
            return true;
        }
    }

    map.obstacles().iter().any(|obstacle| {
        footprints_overlap(candidate_position, unit.size, obstacle.position, obstacle.size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemap::Obstacle;
    use units::Side;

    #[test]
    fn elephant_ignores_enemy_footprints_but_not_obstacles() {
        let map = Map::with_obstacles(20, 20, vec![Obstacle::new(Position::new(5.0, 5.0), 1.0)]);
        let elephant = Unit::new(UnitKind::Elephant, Side::A, Position::new(4.0, 5.0));
        let enemy = Unit::new(UnitKind::Knight, Side::B, Position::new(5.1, 5.0));

        assert!(!would_collide(
            &elephant,
            Position::new(5.1, 5.0),
            &[],
            &[enemy],
            &map
        ));
        assert!(would_collide(
            &elephant,
            Position::new(5.0, 5.0),
            &[],
            &[],
            &map
        ));
    }

    #[test]
    fn non_elephant_blocked_by_enemy_footprint() {
        let map = Map::new(20, 20);
        let knight = Unit::new(UnitKind::Knight, Side::A, Position::new(4.0, 5.0));
        let enemy = Unit::new(UnitKind::Knight, Side::B, Position::new(5.0, 5.0));
        assert!(would_collide(
            &knight,
            Position::new(4.9, 5.0),
            &[],
            &[enemy],
            &map
        ));
    }
}
