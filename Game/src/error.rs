use thiserror::Error;

/// The battle loop's error taxonomy. Everything that can stop or disturb a
/// run funnels through one of these four variants rather than a grab-bag of
/// ad-hoc error types per subsystem.
#[derive(Error, Debug)]
pub enum BattleError {
    /// The scenario handed to the builder can't produce a runnable battle:
    /// an empty army, a map too small to place its obstacles, or similar.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// A core invariant was violated mid-run — e.g. a unit with negative hp,
    /// or a `Side` tag that disagrees with which army's `Vec` holds it.
    /// Always a bug, never a recoverable condition.
    #[error("invariant breach: {0}")]
    InvariantBreach(String),

    /// A proposed action couldn't be applied this tick (target vanished,
    /// stale id, …) and was skipped. Carried as an error variant so an
    /// `Observer` can surface it, but the battle loop itself keeps running.
    #[error("action dropped: {0}")]
    ActionDropped(String),

    /// The observer asked the loop to stop early.
    #[error("battle cancelled by observer")]
    UserCancelled,
}
