use crate::module::{distance_sq, StrategicModule};
use battlemap::Map;
use units::{Unit, UnitId, UnitKind};

/// A scoring tactician: holds melee behind the front line until the enemy
/// closes to a deployment distance (or is nearly wiped out), keeps its
/// Monks on healing duty first, and otherwise picks targets by a
/// damage/distance/focus-fire score rather than pure nearest-enemy.
pub struct GeneralClever {
    is_deployed: bool,
    deployment_threshold_sq: f64,
}

impl Default for GeneralClever {
    fn default() -> Self {
        GeneralClever {
            is_deployed: false,
            deployment_threshold_sq: 49.0,
        }
    }
}

impl GeneralClever {
    fn min_distance_sq(own: &[Unit], enemy: &[Unit]) -> f64 {
        let mut best = f64::INFINITY;
        for unit in own {
            for other in enemy {
                let d = distance_sq(unit, other);
                if d < best {
                    best = d;
                }
            }
        }
        best
    }

    /// `effective_damage / (distance + 1)`, scaled by a focus-fire factor
    /// (finish off the wounded) and a proximity factor (prefer what's
    /// already close).
    fn score(unit: &Unit, enemy: &Unit) -> f64 {
        let bonus = unit.bonus_against(&enemy.classes);
        let effective_damage = ((unit.attack + bonus - enemy.armor).max(1)) as f64;
        let distance = distance_sq(unit, enemy).sqrt();
        let hp_ratio = enemy.hp as f64 / enemy.max_hp as f64;
        let focus = if hp_ratio < 0.5 {
            1.8
        } else if hp_ratio < 0.75 {
            1.3
        } else {
            1.0
        };
        let proximity = 1.0 + (5.0 - distance).max(0.0) * 0.05;
        (effective_damage / (distance + 1.0)) * focus * proximity
    }

    fn choose_best_target<'a>(unit: &Unit, enemy: &'a [Unit]) -> Option<&'a Unit> {
        enemy
            .iter()
            .max_by(|a, b| Self::score(unit, a).partial_cmp(&Self::score(unit, b)).unwrap())
    }
}

impl StrategicModule for GeneralClever {
    fn name(&self) -> &'static str {
        "GeneralClever"
    }

    fn get_targets(&mut self, _map: &Map, own: &[Unit], enemy: &[Unit]) -> Vec<(UnitId, UnitId)> {
        if enemy.is_empty() || own.is_empty() {
            return Vec::new();
        }

        if enemy.len() <= 2 && !self.is_deployed {
            self.is_deployed = true;
            log::info!("general_clever: enemy nearly wiped out, committing to full assault");
        }

        let min_dist_sq = Self::min_distance_sq(own, enemy);
        if !self.is_deployed && min_dist_sq <= self.deployment_threshold_sq {
            self.is_deployed = true;
            log::info!("general_clever: enemy closed to deployment range, breaking formation");
        }

        let mut targets = Vec::new();

        for unit in own {
            if unit.kind == UnitKind::Monk {
                let wounded: Vec<&Unit> = own.iter().filter(|a| a.hp < a.max_hp).collect();
                if let Some(ally) = wounded
                    .iter()
                    .min_by(|a, b| distance_sq(unit, a).partial_cmp(&distance_sq(unit, b)).unwrap())
                {
                    targets.push((unit.id, ally.id));
                    continue;
                }
                if !self.is_deployed {
                    continue;
                }
            }

            let is_ranged = unit.range > 1.0;
            if !self.is_deployed && is_ranged && min_dist_sq > 16.0 {
                continue;
            }

            if let Some(target) = Self::choose_best_target(unit, enemy) {
                targets.push((unit.id, target.id));
            }
        }

        targets
    }
}
