use battle::BattleLoopBuilder;
use battlemap::Position;
use generals::{CaptainBraindead, MajorDaft};
use units::{Side, Unit, UnitKind};

/// Two identical Knights, close enough to engage immediately. Army A acts
/// first every tick, so with identical stats it should come out ahead.
#[test]
fn lone_knight_duel_favors_the_side_that_acts_first() {
    let mut battle = BattleLoopBuilder::new(20, 20)
        .with_max_ticks(500)
        .with_seed(1)
        .with_general_a(Box::new(MajorDaft))
        .with_general_b(Box::new(MajorDaft))
        .with_unit_a(Unit::new(UnitKind::Knight, Side::A, Position::new(5.0, 5.0)))
        .with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(6.0, 5.0)))
        .build()
        .expect("valid scenario");

    let outcome = battle.run().expect("battle completes without cancellation");
    assert_eq!(outcome.winner, Some(Side::A));
}

/// A Pikeman's anti-cavalry bonus should let it beat a lone Knight even
/// though the Knight has higher base attack and armor.
#[test]
fn pikeman_counters_lone_cavalry() {
    let mut battle = BattleLoopBuilder::new(20, 20)
        .with_max_ticks(500)
        .with_seed(2)
        .with_general_a(Box::new(MajorDaft))
        .with_general_b(Box::new(MajorDaft))
        .with_unit_a(Unit::new(UnitKind::Pikeman, Side::A, Position::new(5.0, 5.0)))
        .with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(6.0, 5.0)))
        .build()
        .expect("valid scenario");

    let outcome = battle.run().expect("battle completes without cancellation");
    assert_eq!(outcome.winner, Some(Side::A));
}

/// A Crossbowman kept at range should whittle down a Knight that has to
/// close the distance first, across many seeds (covers the dodge roll
/// going either way).
#[test]
fn crossbowman_outranges_an_approaching_knight_across_seeds() {
    for seed in [10, 11, 12, 13, 14] {
        let mut battle = BattleLoopBuilder::new(30, 30)
            .with_max_ticks(400)
            .with_seed(seed)
            .with_general_a(Box::new(CaptainBraindead))
            .with_general_b(Box::new(MajorDaft))
            .with_unit_a(Unit::new(UnitKind::Crossbowman, Side::A, Position::new(2.0, 2.0)))
            .with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(20.0, 2.0)))
            .build()
            .expect("valid scenario");

        let outcome = battle.run().expect("battle completes without cancellation");
        assert_eq!(outcome.winner, Some(Side::A), "seed {seed} should still favor the crossbowman");
    }
}

/// A Monk on the winning side should keep a wounded ally topped up, then
/// convert a defeated enemy once it's the last one standing.
#[test]
fn monk_heals_allies_and_can_convert_a_lone_weakened_survivor() {
    let mut wounded_pikeman = Unit::new(UnitKind::Pikeman, Side::A, Position::new(5.0, 5.0));
    wounded_pikeman.hp = 10;

    let mut battle = BattleLoopBuilder::new(20, 20)
        .with_max_ticks(300)
        .with_seed(4)
        .with_general_a(Box::new(CaptainBraindead))
        .with_general_b(Box::new(MajorDaft))
        .with_unit_a(Unit::new(UnitKind::Monk, Side::A, Position::new(4.0, 5.0)))
        .with_unit_a(wounded_pikeman)
        .with_unit_b(Unit::new(UnitKind::Elephant, Side::B, Position::new(12.0, 5.0)))
        .build()
        .expect("valid scenario");

    battle.step().expect("tick resolves without an invariant breach");
    let ally_hp_after_one_tick = battle
        .army_a()
        .units()
        .iter()
        .find(|u| u.kind == UnitKind::Pikeman)
        .unwrap()
        .hp;
    assert!(ally_hp_after_one_tick > 10, "monk should have started healing its wounded ally");
}

/// An Elephant's trample should damage every living enemy footprint within
/// its splash radius when it lands an attack, not just its primary target.
#[test]
fn elephant_tramples_multiple_adjacent_enemies() {
    let mut battle = BattleLoopBuilder::new(20, 20)
        .with_max_ticks(1)
        .with_seed(5)
        .with_general_a(Box::new(MajorDaft))
        .with_general_b(Box::new(MajorDaft))
        .with_unit_a(Unit::new(UnitKind::Elephant, Side::A, Position::new(5.0, 5.0)))
        .with_unit_b(Unit::new(UnitKind::Pikeman, Side::B, Position::new(5.1, 5.0)))
        .with_unit_b(Unit::new(UnitKind::Pikeman, Side::B, Position::new(5.0, 5.2)))
        .build()
        .expect("valid scenario");

    battle.step().expect("tick resolves without an invariant breach");
    let hp_values: Vec<i32> = battle.army_b().units().iter().map(|u| u.hp).collect();
    assert!(hp_values.iter().all(|&hp| hp < 55), "both nearby pikemen should take trample damage");
}

/// Units pushed toward the map edge must be clamped inside bounds, never
/// allowed to wander off the playable area.
#[test]
fn units_never_leave_the_map_bounds() {
    let mut battle = BattleLoopBuilder::new(10, 10)
        .with_max_ticks(50)
        .with_seed(6)
        .with_general_a(Box::new(MajorDaft))
        .with_general_b(Box::new(MajorDaft))
        .with_unit_a(Unit::new(UnitKind::Knight, Side::A, Position::new(0.5, 0.5)))
        .with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(9.5, 9.5)))
        .build()
        .expect("valid scenario");

    for _ in 0..10 {
        if !battle.step().expect("tick resolves without an invariant breach") {
            break;
        }
        for unit in battle.army_a().units().iter().chain(battle.army_b().units()) {
            assert!(unit.position.x >= 0.0 && unit.position.x <= 9.0);
            assert!(unit.position.y >= 0.0 && unit.position.y <= 9.0);
        }
    }
}
