//! Read-only case tables and the matching logic for the OLL, PLL and F2L
//! tools. Tables are deserialized from JSON records, validated once at load,
//! and never mutated by lookups; an empty table simply never matches.

pub mod f2l;
pub mod grid;
pub mod oll;
pub mod pll;

use crate::cube333::moves::{BaseMove, CubeMove, Rotation};
use crate::moves::MoveSequence;

/// The y rotations to wrap around a stored algorithm when the user's cube is
/// `turns` quarter turns clockwise from the reference orientation.
fn conjugate_rotations(turns: u8) -> Option<(CubeMove, CubeMove)> {
    let y = |count| CubeMove {
        base: BaseMove::Rotation(Rotation::Y),
        count,
    };
    match turns % 4 {
        1 => Some((y(3), y(1))),
        2 => Some((y(2), y(2))),
        3 => Some((y(1), y(3))),
        _ => None,
    }
}

/// A stored algorithm rewritten to be valid in the user's current
/// orientation, by bracketing it in whole-cube y rotations.
pub(crate) fn conjugated_solution(
    solution: &MoveSequence<CubeMove>,
    turns: u8,
) -> MoveSequence<CubeMove> {
    match conjugate_rotations(turns) {
        None => solution.clone(),
        Some((pre, post)) => MoveSequence(vec![pre])
            .append(solution.clone())
            .append(MoveSequence(vec![post])),
    }
}
