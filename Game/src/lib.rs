//! The tick-driven battle loop: owns both armies, the map, and the single
//! PRNG stream, and drives ticks to completion.
//!
//! - **This crate's job**: orchestrate `generals` (targeting) and `combat`
//!   (translation + application) into a runnable, deterministic battle.
//! - **Not responsible for**: scenario loading, rendering, or persistence —
//!   those live behind `Observer` and the scenario data handed to
//!   `BattleLoopBuilder`, never inside this crate.

mod army;
mod battle_loop;
mod builder;
mod error;
mod invariants;
mod observer;

pub use army::Army;
pub use battle_loop::{BattleLoop, BattleOutcome};
pub use builder::BattleLoopBuilder;
pub use error::BattleError;
pub use observer::{HeadlessObserver, Observer, ObserverSignal};
