use crate::module::{distance_sq, find_by_id, nearest, StrategicModule};
use battlemap::Map;
use units::{Unit, UnitId, UnitKind};

/// Plays rock-paper-scissors by role: Crossbowmen hunt Pikemen, Pikemen hunt
/// Knights, Knights hunt Crossbowmen (Knights switch to hunting Crossbowmen
/// the moment a Pikeman draws blood on them). Elephants hunt enemy
/// Crossbowmen when their own Crossbowmen are close behind; Monks re-engage,
/// heal, convert or attack depending on their own cooldown state. Anyone
/// without a preferred target falls back to retaliation, then nearest enemy.
#[derive(Default)]
pub struct ColonelArchBtw;

const ELEPHANT_SUPPORT_RANGE_SQ: f64 = 9.0; // distance 3, squared

impl ColonelArchBtw {
    fn role_counter<'a>(unit: &Unit, enemy: &'a [Unit]) -> Option<&'a Unit> {
        let pool: Vec<&Unit> = match unit.kind {
            UnitKind::Crossbowman => enemy.iter().filter(|e| e.kind == UnitKind::Pikeman).collect(),
            UnitKind::Knight => {
                let pikeman_hit_us = unit
                    .last_attacker
                    .and_then(|id| find_by_id(enemy, id))
                    .map(|a| a.kind == UnitKind::Pikeman)
                    .unwrap_or(false);
                if pikeman_hit_us {
                    enemy.iter().filter(|e| e.kind == UnitKind::Crossbowman).collect()
                } else {
                    return nearest(unit, enemy);
                }
            }
            UnitKind::Pikeman => enemy.iter().filter(|e| e.kind == UnitKind::Knight).collect(),
            _ => return None,
        };
        pool.into_iter()
            .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap())
    }

    fn elephant_target<'a>(unit: &Unit, own: &[Unit], enemy: &'a [Unit]) -> Option<&'a Unit> {
        let own_crossbow_nearby = own
            .iter()
            .filter(|a| a.kind == UnitKind::Crossbowman)
            .any(|c| distance_sq(unit, c) <= ELEPHANT_SUPPORT_RANGE_SQ);
        if own_crossbow_nearby {
            let enemy_crossbowmen: Vec<&Unit> =
                enemy.iter().filter(|e| e.kind == UnitKind::Crossbowman).collect();
            if let Some(target) = enemy_crossbowmen
                .into_iter()
                .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap())
            {
                return Some(target);
            }
        }
        nearest(unit, enemy)
    }

    /// Monk priority: re-engage a still-fresh `last_attacked` if more than
    /// half the reload remains, else heal the nearest wounded ally, else
    /// convert the nearest enemy Monk/Elephant, else the nearest enemy
    /// outright.
    fn monk_target<'a>(unit: &Unit, own: &'a [Unit], enemy: &'a [Unit]) -> Option<&'a Unit> {
        if unit.cooldown * 2 > unit.reload_time {
            if let Some(previous) = unit.last_attacked.and_then(|id| find_by_id(enemy, id)) {
                return Some(previous);
            }
        }

        let wounded = own
            .iter()
            .filter(|a| a.id != unit.id && a.hp < a.max_hp)
            .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap());
        if let Some(ally) = wounded {
            return Some(ally);
        }

        let convertible: Vec<&Unit> = enemy
            .iter()
            .filter(|e| matches!(e.kind, UnitKind::Monk | UnitKind::Elephant))
            .collect();
        if let Some(target) = convertible
            .into_iter()
            .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap())
        {
            return Some(target);
        }

        nearest(unit, enemy)
    }
}

impl StrategicModule for ColonelArchBtw {
    fn name(&self) -> &'static str {
        "ColonelArchBtw"
    }

    fn get_targets(&mut self, _map: &Map, own: &[Unit], enemy: &[Unit]) -> Vec<(UnitId, UnitId)> {
        let mut targets = Vec::new();

        for unit in own {
            let preferred = match unit.kind {
                UnitKind::Monk => Self::monk_target(unit, own, enemy),
                UnitKind::Elephant => Self::elephant_target(unit, own, enemy),
                _ => Self::role_counter(unit, enemy),
            };
            if let Some(target) = preferred {
                targets.push((unit.id, target.id));
                continue;
            }

            if let Some(attacker_id) = unit.last_attacker {
                if find_by_id(enemy, attacker_id).is_some() {
                    targets.push((unit.id, attacker_id));
                    continue;
                }
            }

            if let Some(nearest_enemy) = nearest(unit, enemy) {
                targets.push((unit.id, nearest_enemy.id));
            }
        }

        targets
    }
}
