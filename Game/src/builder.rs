use crate::army::Army;
use crate::battle_loop::BattleLoop;
use crate::error::BattleError;
use crate::observer::{HeadlessObserver, Observer};
use battlemap::{Map, Obstacle, Position};
use generals::StrategicModule;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use units::{Side, Unit};

/// Assembles a `BattleLoop` from scenario data: map dimensions and
/// obstacles, each side's roster and strategic module, an optional tick
/// cap, and an optional seed for reproducible runs. With no tick cap set,
/// a battle runs until one army is empty.
///
/// ```
/// use battle::BattleLoopBuilder;
/// use generals::MajorDaft;
/// use units::{Side, Unit, UnitKind};
/// use battlemap::Position;
///
/// let mut builder = BattleLoopBuilder::new(40, 40)
///     .with_max_ticks(200)
///     .with_seed(42)
///     .with_general_a(Box::new(MajorDaft))
///     .with_general_b(Box::new(MajorDaft));
/// builder = builder.with_unit_a(Unit::new(UnitKind::Knight, Side::A, Position::new(1.0, 1.0)));
/// builder = builder.with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(38.0, 38.0)));
/// let battle = builder.build().unwrap();
/// assert_eq!(battle.tick_count(), 0);
/// ```
pub struct BattleLoopBuilder {
    width: u32,
    height: u32,
    obstacles: Vec<Obstacle>,
    units_a: Vec<Unit>,
    units_b: Vec<Unit>,
    general_a: Option<Box<dyn StrategicModule>>,
    general_b: Option<Box<dyn StrategicModule>>,
    max_ticks: Option<u32>,
    seed: Option<u64>,
    observer: Option<Box<dyn Observer>>,
}

impl BattleLoopBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        BattleLoopBuilder {
            width,
            height,
            obstacles: Vec::new(),
            units_a: Vec::new(),
            units_b: Vec::new(),
            general_a: None,
            general_b: None,
            max_ticks: None,
            seed: None,
            observer: None,
        }
    }

    pub fn with_obstacle(mut self, position: Position, size: f64) -> Self {
        self.obstacles.push(Obstacle::new(position, size));
        self
    }

    pub fn with_unit_a(mut self, unit: Unit) -> Self {
        self.units_a.push(unit);
        self
    }

    pub fn with_unit_b(mut self, unit: Unit) -> Self {
        self.units_b.push(unit);
        self
    }

    pub fn with_general_a(mut self, general: Box<dyn StrategicModule>) -> Self {
        self.general_a = Some(general);
        self
    }

    pub fn with_general_b(mut self, general: Box<dyn StrategicModule>) -> Self {
        self.general_b = Some(general);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cap the battle at this many ticks, after which it ends in a draw if
    /// both armies are still standing. Leave unset for an uncapped battle
    /// that only ends when one army is empty.
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<BattleLoop, BattleError> {
        if self.units_a.is_empty() || self.units_b.is_empty() {
            return Err(BattleError::InvalidScenario(
                "both armies need at least one living unit to start a battle".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BattleError::InvalidScenario(
                "map width and height must both be positive".into(),
            ));
        }

        let general_a = self
            .general_a
            .ok_or_else(|| BattleError::InvalidScenario("army A has no strategic module".into()))?;
        let general_b = self
            .general_b
            .ok_or_else(|| BattleError::InvalidScenario("army B has no strategic module".into()))?;

        let map = Map::with_obstacles(self.width, self.height, self.obstacles);

        let mut army_a = Army::new(Side::A, general_a);
        for unit in self.units_a {
            army_a.add_unit(unit);
        }
        let mut army_b = Army::new(Side::B, general_b);
        for unit in self.units_b {
            army_b.add_unit(unit);
        }

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let observer = self.observer.unwrap_or_else(|| Box::new(HeadlessObserver));

        Ok(BattleLoop::new(map, army_a, army_b, rng, self.max_ticks, observer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generals::MajorDaft;
    use units::UnitKind;

    #[test]
    fn rejects_a_scenario_with_an_empty_army() {
        let builder = BattleLoopBuilder::new(20, 20)
            .with_max_ticks(100)
            .with_general_a(Box::new(MajorDaft))
            .with_general_b(Box::new(MajorDaft))
            .with_unit_a(Unit::new(UnitKind::Knight, Side::A, Position::new(0.0, 0.0)));
        assert!(matches!(builder.build(), Err(BattleError::InvalidScenario(_))));
    }

    #[test]
    fn same_seed_produces_the_same_outcome() {
        let build = || {
            BattleLoopBuilder::new(30, 30)
                .with_max_ticks(50)
                .with_seed(99)
                .with_general_a(Box::new(MajorDaft))
                .with_general_b(Box::new(MajorDaft))
                .with_unit_a(Unit::new(UnitKind::Crossbowman, Side::A, Position::new(2.0, 2.0)))
                .with_unit_b(Unit::new(UnitKind::Crossbowman, Side::B, Position::new(5.0, 2.0)))
                .build()
                .unwrap()
        };

        let mut first = build();
        let mut second = build();
        let outcome_a = first.run().unwrap();
        let outcome_b = second.run().unwrap();
        assert_eq!(outcome_a, outcome_b);
    }

    #[test]
    fn without_a_tick_cap_the_battle_runs_until_one_army_is_empty() {
        let mut battle = BattleLoopBuilder::new(20, 20)
            .with_seed(7)
            .with_general_a(Box::new(MajorDaft))
            .with_general_b(Box::new(MajorDaft))
            .with_unit_a(Unit::new(UnitKind::Knight, Side::A, Position::new(5.0, 5.0)))
            .with_unit_b(Unit::new(UnitKind::Pikeman, Side::B, Position::new(6.0, 5.0)))
            .build()
            .unwrap();

        let outcome = battle.run().unwrap();
        assert!(outcome.winner.is_some(), "an uncapped battle must still terminate when a side is wiped out");
    }
}
