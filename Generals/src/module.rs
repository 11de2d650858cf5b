use battlemap::Map;
use units::{Unit, UnitId};

/// A strategic module decides, once per tick, which enemy (or ally, for a
/// Monk's heal) each of its living units should act toward. It never moves
/// units or deals damage itself — `combat::translate`/`combat::apply_actions`
/// turn the pairs it returns into actual `Action`s.
///
/// Implementations may hold state across ticks (e.g. a deployment flag), so
/// the method takes `&mut self`.
pub trait StrategicModule {
    /// Name used for registry lookup and logging.
    fn name(&self) -> &'static str;

    /// Return `(unit, target)` pairs for the acting units this tick. `own`
    /// and `enemy` are both restricted to living units by the caller. A unit
    /// absent from the result simply does nothing this tick.
    fn get_targets(&mut self, map: &Map, own: &[Unit], enemy: &[Unit]) -> Vec<(UnitId, UnitId)>;
}

pub(crate) fn distance_sq(a: &Unit, b: &Unit) -> f64 {
    a.position.distance_squared(&b.position)
}

pub(crate) fn nearest<'a>(from: &Unit, candidates: &'a [Unit]) -> Option<&'a Unit> {
    candidates
        .iter()
        .min_by(|a, b| distance_sq(from, a).partial_cmp(&distance_sq(from, b)).unwrap())
}

pub(crate) fn find_by_id<'a>(units: &'a [Unit], id: UnitId) -> Option<&'a Unit> {
    units.iter().find(|u| u.id == id)
}
