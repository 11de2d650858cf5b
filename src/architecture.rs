//! # Architecture Documentation
//!
//! A deeper look at how the five workspace crates divide responsibility,
//! and why the resolver is shaped the way it is.
//!
//! # Crate Organization
//!
//! ## battlemap: Battlefield Geometry
//!
//! **Purpose:** Immutable once a battle starts — bounds and obstacles never
//! move mid-run.
//!
//! **Key types:** `Position` (continuous x/y), `Obstacle` (static circle),
//! `Map` (bounds + obstacles, `clamp`/`in_bounds`).
//!
//! ## units: Combatant Data Model
//!
//! **Purpose:** The stat catalog and the mutable state it stamps out.
//! Contains no combat math and no targeting logic.
//!
//! **Key types:** `UnitKind` (the fixed catalog via `stats()`), `Unit`
//! (mutable hp/position/cooldown/etc.), `UnitId` (a `Uuid` handle used
//! everywhere instead of an owning reference), `Side` (A/B tag replacing an
//! owning back-reference to the army).
//!
//! ## combat: Translation and Resolution
//!
//! **Purpose:** Turn a target assignment into `Action`s, then apply them.
//!
//! **Key types:** `Action` (Attack/Move/Heal/Conversion), `translate()`
//! (target → action, including the rotated-heading collision-avoidance
//! fallback), `apply_actions()` (damage/dodge/miss/trample/heal/conversion
//! mechanics), `ApplyReport` (soft-failure tally).
//!
//! ## generals: Strategic Modules
//!
//! **Purpose:** Decide *who* acts toward *what* each tick. Never touches
//! geometry, damage, or unit mutation directly.
//!
//! **Key types:** `StrategicModule` trait, and four implementations —
//! `CaptainBraindead` (retaliate or nearest-in-sight), `MajorDaft`
//! (unconditional nearest-enemy charge), `ColonelArchBtw` (role-counter
//! triangle with a retaliate/nearest fallback), `GeneralClever` (scored
//! targeting with a deployment threshold and focus-fire on low-hp targets).
//!
//! ## battle: The Tick Loop
//!
//! **Purpose:** Own both armies, the map, and the single PRNG stream; drive
//! ticks to completion or cancellation.
//!
//! **Key types:** `Army` (roster + its `StrategicModule`), `BattleLoop`
//! (the loop itself), `BattleLoopBuilder` (scenario assembly and
//! validation), `Observer` (the render/cancel hook), `BattleError` (the
//! four-variant error taxonomy).
//!
//! # Data Flow: One Tick
//!
//! ```ignore
//! // Army::fight, called once per army per tick, acting then opposing:
//! for unit in self.units.iter_mut() {           // stage 1: cooldown decay
//!     if unit.cooldown > 0 { unit.cooldown -= 1; }
//! }
//! let own_living = self.living();               // stage 2: generals sees living units only
//! let enemy_living = opposing.living();
//! let pairs = self.general.get_targets(map, &own_living, &enemy_living);
//! let assignment = build_target_assignment(pairs);
//! let actions = translate(&self.units, &opposing.units, &assignment, map);
//! apply_actions(&actions, &mut ctx, rng) // stage 3: action resolution
//! ```
//!
//! Targeting and translation both read a unit's cooldown *after* this tick's
//! decay, so a unit that comes off cooldown this tick is eligible to strike
//! the same tick; the apply step's cooldown reset (for a unit that actually
//! acted) then sets it back up for next tick. One ordered clock per army,
//! not two independent updates racing each other.
//!
//! # Integration Points
//!
//! ## generals ↔ combat
//!
//! A `StrategicModule` returns `(UnitId, UnitId)` pairs, not `Action`s — it
//! has no idea whether a target is in reach, whether movement would
//! collide, or what a Monk's Heal-vs-Conversion split looks like. `combat`
//! owns every one of those physical details.
//!
//! ## combat ↔ units
//!
//! `combat` never constructs a `Unit` or knows its stat catalog — it reads
//! the fields it needs (`attack`, `armor`, `bonuses`, `cooldown`, ...) and
//! calls `Unit::take_damage`/`Unit::heal` rather than poking `hp` directly.
//!
//! ## battle ↔ everything
//!
//! `battle::Army` is the only type that holds a `Box<dyn StrategicModule>`
//! next to a live `Vec<Unit>` — it's the seam where "who to target" and
//! "what happens physically" meet.
//!
//! # Design Patterns
//!
//! ## Handles instead of owning references
//!
//! ```ignore
//! pub struct Unit {
//!     pub id: UnitId,                    // Uuid, not a pointer
//!     pub last_attacker: Option<UnitId>, // handle, not &Unit
//!     // ...
//! }
//! ```
//!
//! Lets two armies' `Vec<Unit>` both exist as plain owned data — no
//! `Rc<RefCell<_>>`, no lifetime threading a unit's "army" pointer through
//! every call.
//!
//! ## Deterministic iteration
//!
//! ```ignore
//! // translate() walks `acting` in its own Vec order, looking up each
//! // unit's target in the HashMap — never the other way around.
//! for unit in acting.iter().filter(|u| u.is_alive()) {
//!     let Some(&target_id) = assignment.get(&unit.id) else { continue };
//!     // ...
//! }
//! ```
//!
//! ## Builder for scenario assembly
//!
//! ```ignore
//! BattleLoopBuilder::new(width, height)
//!     .with_max_ticks(max_ticks)
//!     .with_seed(seed)
//!     .with_general_a(general)
//!     .with_unit_a(unit)
//!     .build()?
//! ```
//!
//! Mirrors the unit-construction builder pattern used elsewhere in this
//! workspace, scaled up to whole-scenario assembly, with validation
//! (`InvalidScenario`) deferred to `build()`.
