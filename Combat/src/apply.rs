use crate::action::Action;
use battlemap::Map;
use rand::Rng;
use units::{Side, Unit, UnitId, UnitKind};

/// Bundles the mutable state an apply pass needs: the two armies' unit
/// lists (by value, so `Conversion` can move a `Unit` between them) and the
/// map (for clamping `Move`).
pub struct ApplyContext<'a> {
    pub acting: &'a mut Vec<Unit>,
    pub opposing: &'a mut Vec<Unit>,
    pub map: &'a Map,
}

/// Tally of soft failures encountered while applying a batch of actions —
/// not errors, just actions whose preconditions no longer held by the time
/// they were applied, recovered locally — but useful for an observer or a
/// test to assert nothing unexpected was silently skipped.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub dropped: u32,
}

fn index_of(units: &[Unit], id: UnitId) -> Option<usize> {
    units.iter().position(|u| u.id == id)
}

/// Crossbowman dodge chance against `target`: a base miss chance plus a
/// small bonus for every point of target speed above 1, capped at 20%.
fn crossbow_dodge_chance(target_speed: f64) -> f64 {
    let base_miss = 0.08;
    let speed_factor = 0.015 * (target_speed - 1.0).max(0.0);
    (base_miss + speed_factor).min(0.20)
}

fn apply_trample(elephant: &Unit, opposing: &mut [Unit]) {
    for enemy in opposing.iter_mut().filter(|e| e.is_alive()) {
        if elephant.position.distance_squared(&enemy.position) <= 0.25 * 0.25 {
            enemy.take_damage(elephant.attack);
        }
    }
}

/// Apply one tick's worth of actions in translation order. A later action
/// sees the hp/position effects of earlier ones: resolution is single
/// threaded and strictly ordered, never batched or applied concurrently.
pub fn apply_actions(
    actions: &[Action],
    ctx: &mut ApplyContext,
    rng: &mut impl Rng,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for action in actions {
        match *action {
            Action::Move { unit, new_position } => {
                let Some(i) = index_of(ctx.acting, unit) else {
                    report.dropped += 1;
                    continue;
                };
                ctx.acting[i].position = ctx.map.clamp(new_position);
            }

            Action::Attack { attacker, target } => {
                let Some(ai) = index_of(ctx.acting, attacker) else {
                    report.dropped += 1;
                    continue;
                };
                let Some(ti) = index_of(ctx.opposing, target) else {
                    log::debug!("attack target no longer present; dropping damage, keeping cooldown");
                    ctx.acting[ai].cooldown = ctx.acting[ai].reload_time;
                    report.dropped += 1;
                    continue;
                };
                if !ctx.opposing[ti].is_alive() {
                    ctx.acting[ai].cooldown = ctx.acting[ai].reload_time;
                    report.dropped += 1;
                    continue;
                }

                let attacker_kind = ctx.acting[ai].kind;
                let attacker_id = ctx.acting[ai].id;

                if attacker_kind == UnitKind::Crossbowman {
                    let dodge = crossbow_dodge_chance(ctx.opposing[ti].speed);
                    if rng.gen::<f64>() < dodge {
                        ctx.acting[ai].cooldown = ctx.acting[ai].reload_time;
                        continue;
                    }
                }

                let bonus = ctx.acting[ai].bonus_against(&ctx.opposing[ti].classes);
                let mut raw_attack = ctx.acting[ai].attack;
                if attacker_kind == UnitKind::Pikeman && rng.gen::<f64>() < 0.16 {
                    raw_attack = 0;
                }

                let damage = (raw_attack + bonus - ctx.opposing[ti].armor).max(0);
                ctx.opposing[ti].take_damage(damage);
                ctx.opposing[ti].last_attacker = Some(attacker_id);
                ctx.acting[ai].last_attacked = Some(ctx.opposing[ti].id);
                ctx.acting[ai].cooldown = ctx.acting[ai].reload_time;

                if attacker_kind == UnitKind::Elephant {
                    let elephant = ctx.acting[ai].clone();
                    apply_trample(&elephant, ctx.opposing);
                }
            }

            Action::Heal { monk, ally } => {
                let Some(mi) = index_of(ctx.acting, monk) else {
                    report.dropped += 1;
                    continue;
                };
                let Some(ai) = index_of(ctx.acting, ally) else {
                    report.dropped += 1;
                    continue;
                };
                if !ctx.acting[ai].is_alive() {
                    report.dropped += 1;
                    continue;
                }
                let heal_amount = ctx.acting[mi].attack;
                ctx.acting[ai].heal(heal_amount);
            }

            Action::Conversion { monk, enemy } => {
                let Some(mi) = index_of(ctx.acting, monk) else {
                    report.dropped += 1;
                    continue;
                };
                let Some(ei) = index_of(ctx.opposing, enemy) else {
                    report.dropped += 1;
                    continue;
                };
                if !ctx.opposing[ei].is_alive() {
                    report.dropped += 1;
                    continue;
                }

                let mut converted = ctx.opposing.remove(ei);
                converted.side = ctx.acting[mi].side;
                converted.last_attacker = None;
                converted.last_attacked = None;
                ctx.acting.push(converted);

                ctx.acting[mi].cooldown = ctx.acting[mi].reload_time;
            }
        }
    }

    report
}

/// Convenience for callers that only need the army-side tag flipped, e.g.
/// tests constructing a unit directly rather than through `Army`.
pub fn opposite_side(side: Side) -> Side {
    side.opposite()
}
