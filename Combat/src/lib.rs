//! Turns a strategic module's target assignment into concrete actions and
//! applies those actions to unit state: the stage-2/stage-3 half of the
//! per-tick pipeline. Does not decide *who* to target — that's the
//! `generals` crate's job — only *what happens* once targets are chosen.

mod action;
mod apply;
mod collision;
mod translate;

pub use action::Action;
pub use apply::{apply_actions, opposite_side, ApplyContext, ApplyReport};
pub use collision::{footprints_overlap, would_collide};
pub use translate::{build_target_assignment, translate, TargetAssignment};
