use battlemap::Position;
use units::UnitId;

/// The unit of work produced by translating a target assignment into
/// concrete physical actions. Lives only within one tick; nothing persists
/// an `Action` past the apply step.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Attack { attacker: UnitId, target: UnitId },
    Move { unit: UnitId, new_position: Position },
    Heal { monk: UnitId, ally: UnitId },
    Conversion { monk: UnitId, enemy: UnitId },
}
