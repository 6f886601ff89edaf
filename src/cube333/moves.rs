//! The move algebra for the facelet cube: face turns, slice moves, whole-cube
//! rotations, and how they act on a [`FaceletCube`].

use super::{Face, FaceletCube};
use crate::error::NotationError;
use crate::moves::{Cancellation, MoveSequence};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The three middle layers. Each turns in the direction of the face it
/// follows: M follows L, E follows D, S follows F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Slice {
    M,
    E,
    S,
}

/// Whole-cube reorientations. Each follows the direction of a face turn:
/// x follows R, y follows U, z follows F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Rotation {
    X,
    Y,
    Z,
}

/// Which layer or layers a move turns. A move's base fully determines the
/// affected layers and the direction of a single (count 1) application;
/// notation suffixes only change the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum BaseMove {
    /// An outer face turn.
    Face(Face),
    /// A wide turn: the face together with the adjacent middle layer.
    Wide(Face),
    /// A middle layer turn.
    Slice(Slice),
    /// A whole-cube rotation.
    Rotation(Rotation),
}

/// The turn axes, used to decide which moves commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnAxis {
    UD,
    LR,
    FB,
}

impl BaseMove {
    fn axis(self) -> TurnAxis {
        match self {
            BaseMove::Face(f) | BaseMove::Wide(f) => match f {
                Face::U | Face::D => TurnAxis::UD,
                Face::L | Face::R => TurnAxis::LR,
                Face::F | Face::B => TurnAxis::FB,
            },
            BaseMove::Slice(Slice::E) | BaseMove::Rotation(Rotation::Y) => TurnAxis::UD,
            BaseMove::Slice(Slice::M) | BaseMove::Rotation(Rotation::X) => TurnAxis::LR,
            BaseMove::Slice(Slice::S) | BaseMove::Rotation(Rotation::Z) => TurnAxis::FB,
        }
    }
}

/// Stores a move base and counter. An anti-clockwise move will have a count
/// of 3, and is always executed as three forward quarter turns rather than
/// through a separately coded inverse path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct CubeMove {
    pub base: BaseMove,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for CubeMove {
    fn inverse(self) -> Self {
        Self {
            base: self.base,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        // Turns about the same axis leave each other's layers and directions
        // in place, so the axis relation is sound, and it is transitive.
        self.base.axis() == b.base.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.base == b.base {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(CubeMove {
                    base: self.base,
                    count,
                })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

impl fmt::Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BaseMove::Face(Face::U) => "U",
            BaseMove::Face(Face::D) => "D",
            BaseMove::Face(Face::L) => "L",
            BaseMove::Face(Face::R) => "R",
            BaseMove::Face(Face::F) => "F",
            BaseMove::Face(Face::B) => "B",
            BaseMove::Wide(Face::U) => "u",
            BaseMove::Wide(Face::D) => "d",
            BaseMove::Wide(Face::L) => "l",
            BaseMove::Wide(Face::R) => "r",
            BaseMove::Wide(Face::F) => "f",
            BaseMove::Wide(Face::B) => "b",
            BaseMove::Slice(Slice::M) => "M",
            BaseMove::Slice(Slice::E) => "E",
            BaseMove::Slice(Slice::S) => "S",
            BaseMove::Rotation(Rotation::X) => "x",
            BaseMove::Rotation(Rotation::Y) => "y",
            BaseMove::Rotation(Rotation::Z) => "z",
        };
        f.write_str(s)
    }
}

impl fmt::Display for CubeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.base),
            3 => write!(f, "{}'", self.base),
            _ => write!(f, "{}{}", self.base, self.count),
        }
    }
}

impl FromStr for CubeMove {
    type Err = NotationError;

    /// Parse one notation token: a base letter or letter pair, optionally
    /// followed by `'` or `2`. A trailing `w` on an uppercase face letter and
    /// a bare lowercase face letter both denote the wide move; the base is
    /// normalized to the lowercase spelling.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (body, count) = if let Some(body) = token.strip_suffix('\'') {
            (body, 3)
        } else if let Some(body) = token.strip_suffix('2') {
            (body, 2)
        } else {
            (token, 1)
        };

        let base = match body {
            "U" => BaseMove::Face(Face::U),
            "D" => BaseMove::Face(Face::D),
            "L" => BaseMove::Face(Face::L),
            "R" => BaseMove::Face(Face::R),
            "F" => BaseMove::Face(Face::F),
            "B" => BaseMove::Face(Face::B),
            "u" | "Uw" => BaseMove::Wide(Face::U),
            "d" | "Dw" => BaseMove::Wide(Face::D),
            "l" | "Lw" => BaseMove::Wide(Face::L),
            "r" | "Rw" => BaseMove::Wide(Face::R),
            "f" | "Fw" => BaseMove::Wide(Face::F),
            "b" | "Bw" => BaseMove::Wide(Face::B),
            "M" => BaseMove::Slice(Slice::M),
            "E" => BaseMove::Slice(Slice::E),
            "S" => BaseMove::Slice(Slice::S),
            "x" => BaseMove::Rotation(Rotation::X),
            "y" => BaseMove::Rotation(Rotation::Y),
            "z" => BaseMove::Rotation(Rotation::Z),
            _ => return Err(NotationError::UnrecognizedToken(token.to_owned())),
        };

        Ok(CubeMove { base, count })
    }
}

/// Create a face move by specifying the face letter and move count, e.g.
/// `mv!(R, 2)` for R2.
#[macro_export]
macro_rules! mv {
    ($face:ident, $count:expr) => {
        $crate::cube333::moves::CubeMove {
            base: $crate::cube333::moves::BaseMove::Face($crate::cube333::Face::$face),
            count: $count,
        }
    };
}

type StickerCycle = [(Face, usize); 4];

// Ring cycles for the six face turns, clockwise looking at the face.
// Indexed by Face.
const FACE_RINGS: [[StickerCycle; 3]; 6] = [
    // U
    [
        [(Face::F, 0), (Face::L, 0), (Face::B, 0), (Face::R, 0)],
        [(Face::F, 1), (Face::L, 1), (Face::B, 1), (Face::R, 1)],
        [(Face::F, 2), (Face::L, 2), (Face::B, 2), (Face::R, 2)],
    ],
    // D
    [
        [(Face::F, 6), (Face::R, 6), (Face::B, 6), (Face::L, 6)],
        [(Face::F, 7), (Face::R, 7), (Face::B, 7), (Face::L, 7)],
        [(Face::F, 8), (Face::R, 8), (Face::B, 8), (Face::L, 8)],
    ],
    // L
    [
        [(Face::F, 0), (Face::D, 0), (Face::B, 8), (Face::U, 0)],
        [(Face::F, 3), (Face::D, 3), (Face::B, 5), (Face::U, 3)],
        [(Face::F, 6), (Face::D, 6), (Face::B, 2), (Face::U, 6)],
    ],
    // R
    [
        [(Face::F, 2), (Face::U, 2), (Face::B, 6), (Face::D, 2)],
        [(Face::F, 5), (Face::U, 5), (Face::B, 3), (Face::D, 5)],
        [(Face::F, 8), (Face::U, 8), (Face::B, 0), (Face::D, 8)],
    ],
    // F
    [
        [(Face::U, 6), (Face::R, 0), (Face::D, 2), (Face::L, 8)],
        [(Face::U, 7), (Face::R, 3), (Face::D, 1), (Face::L, 5)],
        [(Face::U, 8), (Face::R, 6), (Face::D, 0), (Face::L, 2)],
    ],
    // B
    [
        [(Face::U, 2), (Face::L, 0), (Face::D, 6), (Face::R, 8)],
        [(Face::U, 1), (Face::L, 3), (Face::D, 7), (Face::R, 5)],
        [(Face::U, 0), (Face::L, 6), (Face::D, 8), (Face::R, 2)],
    ],
];

// Sticker cycles for one forward quarter turn of each middle layer.
// Indexed by Slice.
const SLICE_CYCLES: [[StickerCycle; 3]; 3] = [
    // M follows L: the front column goes down.
    [
        [(Face::F, 1), (Face::D, 1), (Face::B, 7), (Face::U, 1)],
        [(Face::F, 4), (Face::D, 4), (Face::B, 4), (Face::U, 4)],
        [(Face::F, 7), (Face::D, 7), (Face::B, 1), (Face::U, 7)],
    ],
    // E follows D: the front row goes right.
    [
        [(Face::F, 3), (Face::R, 3), (Face::B, 3), (Face::L, 3)],
        [(Face::F, 4), (Face::R, 4), (Face::B, 4), (Face::L, 4)],
        [(Face::F, 5), (Face::R, 5), (Face::B, 5), (Face::L, 5)],
    ],
    // S follows F.
    [
        [(Face::U, 3), (Face::R, 1), (Face::D, 5), (Face::L, 7)],
        [(Face::U, 4), (Face::R, 4), (Face::D, 4), (Face::L, 4)],
        [(Face::U, 5), (Face::R, 7), (Face::D, 3), (Face::L, 1)],
    ],
];

/// The fixed generator product defining each compound move in terms of face
/// and slice quarter turns. A count of 3 is the inverse, executed forwards.
fn generator_product(base: BaseMove) -> &'static [(BaseMove, u8)] {
    const R1: (BaseMove, u8) = (BaseMove::Face(Face::R), 1);
    const L1: (BaseMove, u8) = (BaseMove::Face(Face::L), 1);
    const L3: (BaseMove, u8) = (BaseMove::Face(Face::L), 3);
    const U1: (BaseMove, u8) = (BaseMove::Face(Face::U), 1);
    const D1: (BaseMove, u8) = (BaseMove::Face(Face::D), 1);
    const D3: (BaseMove, u8) = (BaseMove::Face(Face::D), 3);
    const F1: (BaseMove, u8) = (BaseMove::Face(Face::F), 1);
    const B1: (BaseMove, u8) = (BaseMove::Face(Face::B), 1);
    const B3: (BaseMove, u8) = (BaseMove::Face(Face::B), 3);
    const M1: (BaseMove, u8) = (BaseMove::Slice(Slice::M), 1);
    const M3: (BaseMove, u8) = (BaseMove::Slice(Slice::M), 3);
    const E1: (BaseMove, u8) = (BaseMove::Slice(Slice::E), 1);
    const E3: (BaseMove, u8) = (BaseMove::Slice(Slice::E), 3);
    const S1: (BaseMove, u8) = (BaseMove::Slice(Slice::S), 1);
    const S3: (BaseMove, u8) = (BaseMove::Slice(Slice::S), 3);

    match base {
        BaseMove::Wide(Face::R) => &[R1, M3],
        BaseMove::Wide(Face::L) => &[L1, M1],
        BaseMove::Wide(Face::U) => &[U1, E3],
        BaseMove::Wide(Face::D) => &[D1, E1],
        BaseMove::Wide(Face::F) => &[F1, S1],
        BaseMove::Wide(Face::B) => &[B1, S3],
        BaseMove::Rotation(Rotation::X) => &[R1, M3, L3],
        BaseMove::Rotation(Rotation::Y) => &[U1, E3, D3],
        BaseMove::Rotation(Rotation::Z) => &[F1, S1, B3],
        BaseMove::Face(_) | BaseMove::Slice(_) => &[],
    }
}

impl FaceletCube {
    /// Apply an algorithm to a cube.
    pub fn make_moves(self, mvs: &MoveSequence<CubeMove>) -> FaceletCube {
        mvs.0.iter().fold(self, |c, &m| c.make_move(m))
    }

    /// Apply a move to a cube. The count is handled by repeating the forward
    /// quarter turn, so a count of 3 and the inverse always agree.
    pub fn make_move(self, mv: CubeMove) -> FaceletCube {
        (0..mv.count).fold(self, |c, _| c.make_base(mv.base))
    }

    /// Make a single quarter-turn application of a base move. Wide moves and
    /// rotations expand to their generator product.
    pub fn make_base(self, base: BaseMove) -> FaceletCube {
        match base {
            BaseMove::Face(f) => self.face_turn(f),
            BaseMove::Slice(s) => self.slice_turn(s),
            BaseMove::Wide(_) | BaseMove::Rotation(_) => generator_product(base)
                .iter()
                .fold(self, |c, &(b, n)| (0..n).fold(c, |c, _| c.make_base(b))),
        }
    }

    fn face_turn(mut self, face: Face) -> FaceletCube {
        self.cycle([(face, 0), (face, 2), (face, 8), (face, 6)]);
        self.cycle([(face, 1), (face, 5), (face, 7), (face, 3)]);
        for ring in FACE_RINGS[face as usize] {
            self.cycle(ring);
        }
        self
    }

    fn slice_turn(mut self, slice: Slice) -> FaceletCube {
        for ring in SLICE_CYCLES[slice as usize] {
            self.cycle(ring);
        }
        self
    }
}
