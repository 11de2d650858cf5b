//! Strategic modules: pluggable per-army decision logic for the battle loop.
//!
//! - **This crate's job**: "which unit should act toward which target this tick?"
//! - **Consumed by**: `battle::Army`, which calls `get_targets` once per tick
//!   and hands the result to `combat::translate`.
//! - **Not responsible for**: collision, movement, damage, or any other
//!   physical resolution — that's `combat`'s job.

mod captain_braindead;
mod colonel_archbtw;
mod general_clever;
mod major_daft;
mod module;
mod registry;

pub use captain_braindead::CaptainBraindead;
pub use colonel_archbtw::ColonelArchBtw;
pub use general_clever::GeneralClever;
pub use major_daft::MajorDaft;
pub use module::StrategicModule;
pub use registry::by_name;
