use crate::action::Action;
use crate::collision::would_collide;
use battlemap::{Map, Position};
use std::collections::HashMap;
use units::{Unit, UnitId, UnitKind};

/// The per-tick target map a strategic module returns: at most one target
/// per unit. Built from the module's `(unit, target)` pairs; later entries
/// for the same unit overwrite earlier ones ("last write wins").
pub type TargetAssignment = HashMap<UnitId, UnitId>;

pub fn build_target_assignment(pairs: impl IntoIterator<Item = (UnitId, UnitId)>) -> TargetAssignment {
    let mut map = TargetAssignment::new();
    for (unit, target) in pairs {
        map.insert(unit, target);
    }
    map
}

fn find<'a>(units: &'a [Unit], id: UnitId) -> Option<&'a Unit> {
    units.iter().find(|u| u.id == id)
}

/// Effective reach: `range + (attacker.size + target.size) / 2`, using
/// `convert_range` instead of `range` for a Monk targeting an Elephant or a
/// Castle (conversion only works up close).
fn reach(attacker: &Unit, target: &Unit) -> f64 {
    let base_range = if attacker.kind == UnitKind::Monk
        && matches!(target.kind, UnitKind::Elephant | UnitKind::Castle)
    {
        attacker.convert_range
    } else {
        attacker.range
    };
    base_range + (attacker.size + target.size) / 2.0
}

/// Try a straight-line step, then the two one-radian rotated headings, in
/// that order; return the first that doesn't collide.
fn pick_heading(
    unit: &Unit,
    vector: Position,
    allies: &[Unit],
    enemies: &[Unit],
    map: &Map,
) -> Option<Position> {
    for candidate in [vector, vector.rotated(1.0), vector.rotated(-1.0)] {
        let candidate_position = unit.position + candidate;
        if !would_collide(unit, candidate_position, allies, enemies, map) {
            return Some(candidate_position);
        }
    }
    None
}

/// Translate a tick's target assignment into the ordered list of actions to
/// apply. Iterates `acting` in its own storage order (not the assignment's
/// hash order) so translation — and hence the whole tick — is
/// deterministic for a given unit ordering and PRNG seed.
pub fn translate(
    acting: &[Unit],
    opposing: &[Unit],
    assignment: &TargetAssignment,
    map: &Map,
) -> Vec<Action> {
    let mut actions = Vec::new();

    for unit in acting.iter().filter(|u| u.is_alive()) {
        let Some(&target_id) = assignment.get(&unit.id) else {
            continue;
        };

        let in_own_army = find(acting, target_id).is_some();
        let Some(target) = find(acting, target_id).or_else(|| find(opposing, target_id)) else {
            continue;
        };
        if !target.is_alive() {
            continue;
        }

        let effective_reach = reach(unit, target);
        if unit.position.distance_squared(&target.position) <= effective_reach * effective_reach {
            if unit.kind == UnitKind::Monk {
                if in_own_army {
                    actions.push(Action::Heal {
                        monk: unit.id,
                        ally: target.id,
                    });
                } else if unit.cooldown <= 0 {
                    actions.push(Action::Conversion {
                        monk: unit.id,
                        enemy: target.id,
                    });
                }
            } else if !in_own_army && unit.cooldown <= 0 {
                actions.push(Action::Attack {
                    attacker: unit.id,
                    target: target.id,
                });
            }
        } else {
            let delta = target.position - unit.position;
            let distance = unit.position.distance(&target.position);
            if distance > 0.0 {
                let vector = delta * (unit.speed / distance);
                let allies_excluding_self: Vec<Unit> =
                    acting.iter().filter(|a| a.id != unit.id).cloned().collect();
                if let Some(new_position) =
                    pick_heading(unit, vector, &allies_excluding_self, opposing, map)
                {
                    actions.push(Action::Move {
                        unit: unit.id,
                        new_position,
                    });
                }
            }
        }
    }

    actions
}
