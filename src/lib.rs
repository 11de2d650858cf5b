//! # skirmish: a deterministic tick-driven battle engine
//!
//! A Cargo workspace that simulates a medieval skirmish between two armies,
//! tick by tick, with no rendering, persistence, or CLI baked into the core.
//!
//! ## Quick Start
//!
//! ```bash
//! # Build the whole workspace
//! cargo build --workspace
//!
//! # Run a crate's tests
//! cargo test -p battle
//!
//! # Generate docs
//! cargo doc --workspace --open
//! ```
//!
//! ## Workspace Overview
//!
//! - **[`battlemap`]** — the rectangular battlefield and its static circular obstacles
//! - **[`units`]** — the stat catalog (`UnitKind::stats`) and the mutable `Unit` it stamps out
//! - **[`combat`]** — target-to-action translation, collision avoidance, and action application
//! - **[`generals`]** — pluggable strategic modules (`StrategicModule`) that choose targets
//! - **[`battle`]** — `Army` and `BattleLoop`, wiring the above into a runnable tick loop
//!
//! ## System Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         BattleLoop                          │
//! │   owns: Map, Army A, Army B, one PRNG stream, tick counter  │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │ each tick, per army, in fixed order
//!              ┌──────────────┼───────────────┐
//!              │              │               │
//!         ┌────▼────┐   ┌─────▼─────┐   ┌─────▼─────┐
//!         │generals │   │  combat   │   │   units   │
//!         │get_targets│→│translate/ │→ │  mutated  │
//!         │         │   │  apply    │   │  in place │
//!         └─────────┘   └───────────┘   └───────────┘
//! ```
//!
//! A tick is: decay cooldowns, ask the acting army's
//! [`generals::StrategicModule`] for a `(unit, target)` assignment,
//! [`combat::translate`] that assignment into concrete [`combat::Action`]s
//! against the current geometry, then [`combat::apply_actions`] against both
//! armies' unit lists. Army A always resolves before Army B, so a given seed
//! reproduces a given battle exactly.
//!
//! ## Design Notes
//!
//! - **Determinism**: a single owned, seedable PRNG stream
//!   (`rand_chacha::ChaCha8Rng`) is threaded through every roll. Nothing
//!   reaches for a thread-local or ambient source of randomness, and target
//!   assignment is always read by iterating a `Vec<Unit>` in storage order
//!   rather than a `HashMap`'s (unspecified) key order.
//! - **Identity over ownership**: units are addressed by a stable
//!   [`units::UnitId`] handle rather than an owning back-reference to their
//!   army, so `last_attacker`/`last_attacked` and target assignments don't
//!   fight the borrow checker.
//! - **Out of scope for this engine**: scenario loading, rendering,
//!   persistence, and any CLI surface. Those are expected to sit behind
//!   [`battle::Observer`] and the data a caller hands to
//!   [`battle::BattleLoopBuilder`], never inside these crates.
//!
//! ## Example
//!
//! ```
//! use battle::BattleLoopBuilder;
//! use generals::MajorDaft;
//! use units::{Side, Unit, UnitKind};
//! use battlemap::Position;
//!
//! let mut battle = BattleLoopBuilder::new(30, 30)
//!     .with_max_ticks(200)
//!     .with_seed(7)
//!     .with_general_a(Box::new(MajorDaft))
//!     .with_general_b(Box::new(MajorDaft))
//!     .with_unit_a(Unit::new(UnitKind::Pikeman, Side::A, Position::new(2.0, 2.0)))
//!     .with_unit_b(Unit::new(UnitKind::Knight, Side::B, Position::new(5.0, 2.0)))
//!     .build()
//!     .unwrap();
//!
//! let outcome = battle.run().unwrap();
//! println!("winner: {:?} after {} ticks", outcome.winner, outcome.ticks_elapsed);
//! ```

pub mod architecture;

pub use battle;
pub use battlemap;
pub use combat;
pub use generals;
pub use units;

pub use battle::{Army, BattleLoop, BattleLoopBuilder, BattleOutcome, Observer};
pub use battlemap::{Map, Obstacle, Position};
pub use combat::Action;
pub use generals::StrategicModule;
pub use units::{Side, Unit, UnitId, UnitKind};
