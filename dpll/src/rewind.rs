/// Undo changes to a data structure made since some earlier state.
///
/// The search calls this when a decision fails,
/// so `T` should be small, such as the length of a trail.
pub trait Rewind<T> {
    fn rewind(&mut self, state: T);
}
