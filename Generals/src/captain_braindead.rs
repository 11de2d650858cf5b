use crate::module::{distance_sq, find_by_id, nearest, StrategicModule};
use battlemap::Map;
use units::{Unit, UnitId, UnitKind};

/// Units retaliate against their last attacker; failing that they engage
/// whatever enemy is nearest, provided it's within line of sight. A Monk on
/// cooldown looks for a wounded ally to heal instead of picking a fresh
/// conversion target.
#[derive(Default)]
pub struct CaptainBraindead;

impl StrategicModule for CaptainBraindead {
    fn name(&self) -> &'static str {
        "CaptainBraindead"
    }

    fn get_targets(&mut self, _map: &Map, own: &[Unit], enemy: &[Unit]) -> Vec<(UnitId, UnitId)> {
        let mut targets = Vec::new();
        if enemy.is_empty() {
            return targets;
        }

        for unit in own {
            if let Some(attacker_id) = unit.last_attacker {
                if find_by_id(enemy, attacker_id).is_some() {
                    targets.push((unit.id, attacker_id));
                    continue;
                }
            }

            let Some(nearest_enemy) = nearest(unit, enemy) else {
                continue;
            };

            if unit.kind != UnitKind::Monk {
                if distance_sq(unit, nearest_enemy) < unit.line_of_sight * unit.line_of_sight {
                    targets.push((unit.id, nearest_enemy.id));
                }
                continue;
            }

            if unit.cooldown > 0 {
                let wounded: Vec<&Unit> = own
                    .iter()
                    .filter(|a| a.id != unit.id && a.hp < a.max_hp)
                    .collect();
                if let Some(ally) = wounded
                    .iter()
                    .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap())
                {
                    if distance_sq(unit, ally) < unit.line_of_sight * unit.line_of_sight {
                        targets.push((unit.id, ally.id));
                    }
                }
            } else if distance_sq(unit, nearest_enemy) < unit.line_of_sight * unit.line_of_sight {
                targets.push((unit.id, nearest_enemy.id));
            }
        }

        targets
    }
}
