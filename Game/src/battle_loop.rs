use crate::army::Army;
use crate::error::BattleError;
use crate::invariants;
use crate::observer::{Observer, ObserverSignal};
use battlemap::Map;
use rand_chacha::ChaCha8Rng;
use units::Side;

/// Result of a completed (or quit) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleOutcome {
    pub ticks_elapsed: u32,
    /// `None` means the battle hit its tick cap with both armies still
    /// standing — a draw by exhaustion, not a stalemate invariant breach.
    pub winner: Option<Side>,
}

/// Owns both armies, the map, the single PRNG stream, and drives the
/// tick loop. Armies act in a fixed order each tick (`army_a` then
/// `army_b`), so a tick is fully deterministic given the seed. `max_ticks`
/// is optional: left unset, the battle only ends once one army is empty.
pub struct BattleLoop {
    map: Map,
    army_a: Army,
    army_b: Army,
    rng: ChaCha8Rng,
    tick: u32,
    max_ticks: Option<u32>,
    observer: Box<dyn Observer>,
}

impl BattleLoop {
    /// Start assembling a scenario. Equivalent to
    /// `BattleLoopBuilder::new(width, height)`.
    pub fn builder(width: u32, height: u32) -> crate::builder::BattleLoopBuilder {
        crate::builder::BattleLoopBuilder::new(width, height)
    }

    pub(crate) fn new(
        map: Map,
        army_a: Army,
        army_b: Army,
        rng: ChaCha8Rng,
        max_ticks: Option<u32>,
        observer: Box<dyn Observer>,
    ) -> Self {
        BattleLoop {
            map,
            army_a,
            army_b,
            rng,
            tick: 0,
            max_ticks,
            observer,
        }
    }

    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    pub fn army_a(&self) -> &Army {
        &self.army_a
    }

    pub fn army_b(&self) -> &Army {
        &self.army_b
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Advance exactly one tick: army A acts (targets, translates, applies
    /// against the pre-tick state of B), then army B acts against the
    /// now-updated A. Returns `Ok(false)` once a stopping condition is
    /// reached (a side wiped out, or the tick cap hit, if one is set) so
    /// callers can stop looping without consulting `run`'s observer
    /// plumbing. Returns `Err(BattleError::InvariantBreach(..))` if either
    /// side's units violate a post-condition (hp out of range, a unit out
    /// of bounds, overlapping footprints, or a side tag that disagrees
    /// with its owning army) after resolution; `run` surfaces this without
    /// ever rendering the offending post-tick state to the observer.
    pub fn step(&mut self) -> Result<bool, BattleError> {
        let cap_reached = self.max_ticks.is_some_and(|cap| self.tick >= cap);
        if self.army_a.is_empty() || self.army_b.is_empty() || cap_reached {
            return Ok(false);
        }
        log::debug!("tick {} start", self.tick);

        let report_a = self.army_a.fight(&mut self.army_b, &self.map, &mut self.rng);
        if report_a.dropped > 0 {
            log::debug!("army A dropped {} action(s) this tick", report_a.dropped);
        }

        if !self.army_b.is_empty() {
            let report_b = self.army_b.fight(&mut self.army_a, &self.map, &mut self.rng);
            if report_b.dropped > 0 {
                log::debug!("army B dropped {} action(s) this tick", report_b.dropped);
            }
        }

        invariants::check(&self.map, &self.army_a, &self.army_b)?;

        self.tick += 1;
        Ok(true)
    }

    /// Run to completion: repeatedly `step()`, calling the observer after
    /// each tick, until a side is wiped out, the tick cap (if any) is
    /// reached, the observer asks to stop, or a post-condition is breached.
    pub fn run(&mut self) -> Result<BattleOutcome, BattleError> {
        self.observer.init();

        loop {
            self.observer.render(&self.map, &self.army_a, &self.army_b);

            let advanced = self.step()?;

            let signal = self.observer.render(&self.map, &self.army_a, &self.army_b);
            if signal == ObserverSignal::Quit {
                return Err(BattleError::UserCancelled);
            }

            if !advanced {
                break;
            }
        }

        let winner = match (self.army_a.is_empty(), self.army_b.is_empty()) {
            (true, true) => None,
            (true, false) => Some(Side::B),
            (false, true) => Some(Side::A),
            (false, false) => None,
        };
        log::info!("battle ended after {} ticks, winner={:?}", self.tick, winner);

        Ok(BattleOutcome {
            ticks_elapsed: self.tick,
            winner,
        })
    }
}
