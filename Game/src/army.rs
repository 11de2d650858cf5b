use battlemap::Map;
use combat::{apply_actions, build_target_assignment, translate, ApplyContext, ApplyReport};
use generals::StrategicModule;
use rand::Rng;
use std::collections::HashMap;
use units::{Side, Unit, UnitKind};

/// One side of a battle: its roster and the strategic module that decides
/// targets for it each tick.
pub struct Army {
    units: Vec<Unit>,
    side: Side,
    general: Box<dyn StrategicModule>,
}

impl Army {
    pub fn new(side: Side, general: Box<dyn StrategicModule>) -> Self {
        Army {
            units: Vec::new(),
            side,
            general,
        }
    }

    pub fn add_unit(&mut self, unit: Unit) {
        debug_assert_eq!(unit.side, self.side, "unit's side tag must match the army it's added to");
        self.units.push(unit);
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn general_name(&self) -> &'static str {
        self.general.name()
    }

    /// Living units, cloned out for a general or for collision lookups that
    /// need an owned snapshot rather than a borrow into `self.units`.
    pub fn living(&self) -> Vec<Unit> {
        self.units.iter().filter(|u| u.is_alive()).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.units.iter().all(|u| !u.is_alive())
    }

    pub fn count_by_kind(&self) -> HashMap<UnitKind, usize> {
        let mut counts = HashMap::new();
        for unit in self.units.iter().filter(|u| u.is_alive()) {
            *counts.entry(unit.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Run this army's slice of one tick, in three strictly ordered stages:
    /// decay cooldowns, assign targets, resolve actions. Targeting and
    /// translation both see post-decay cooldowns, so a unit that comes off
    /// cooldown this tick is eligible to strike the same tick.
    pub fn fight(&mut self, opposing: &mut Army, map: &Map, rng: &mut impl Rng) -> ApplyReport {
        for unit in self.units.iter_mut() {
            if unit.cooldown > 0 {
                unit.cooldown -= 1;
            }
        }

        let own_living = self.living();
        let enemy_living = opposing.living();
        if enemy_living.is_empty() {
            return ApplyReport::default();
        }

        let pairs = self.general.get_targets(map, &own_living, &enemy_living);
        let assignment = build_target_assignment(pairs);
        let actions = translate(&self.units, &opposing.units, &assignment, map);

        let mut ctx = ApplyContext {
            acting: &mut self.units,
            opposing: &mut opposing.units,
            map,
        };
        apply_actions(&actions, &mut ctx, rng)
    }
}
