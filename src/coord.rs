//! We give a general description of a coordinate, which is a type used to
//! encode a puzzle state as a dense integer for use as a table key.

/// A coordinate type, encoding states of the puzzle P injectively.
///
/// Two states of P map to the same coordinate iff they are equal, so a
/// coordinate can stand in for the state itself in visited sets and lookup
/// tables without serializing anything.
pub trait Coordinate<P>: Copy + Eq {
    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// The number of possible coordinate states.
    fn count() -> usize;

    /// A representation of this coordinate as a usize, for use in table lookups.
    /// Always less than [`count`](Coordinate::count).
    fn repr(self) -> usize;
}
