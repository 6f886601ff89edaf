//! Types and algebra for the 3x3x3 cube: the facelet model used for replay
//! and pattern derivation, and the reduced four-edge model the cross solver
//! searches over.

pub mod cross;
pub mod moves;
pub mod notation;

use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The six faces of the cube. Doubles as the index into the facelet state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Down
    D,
    /// Left
    L,
    /// Right
    R,
    /// Front
    F,
    /// Back
    B,
}

impl Face {
    /// The face opposite to the given one.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// The color this face shows on a solved cube. The trainer's reference
    /// scheme is yellow on top and green in front.
    pub fn solved_color(self) -> FaceColor {
        match self {
            Face::U => FaceColor::Yellow,
            Face::D => FaceColor::White,
            Face::L => FaceColor::Red,
            Face::R => FaceColor::Orange,
            Face::F => FaceColor::Green,
            Face::B => FaceColor::Blue,
        }
    }
}

/// One of the six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaceColor {
    /// White, the cross color in the trainer's reference scheme.
    White,
    /// Yellow
    Yellow,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Red
    Red,
    /// Orange
    Orange,
}

impl FaceColor {
    fn initial(self) -> char {
        match self {
            FaceColor::White => 'W',
            FaceColor::Yellow => 'Y',
            FaceColor::Green => 'G',
            FaceColor::Blue => 'B',
            FaceColor::Red => 'R',
            FaceColor::Orange => 'O',
        }
    }
}

/// The twelve edge slots of the cube, named by the two faces they touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum EdgePos {
    UB,
    UL,
    UR,
    UF,
    LB,
    LF,
    RB,
    RF,
    DB,
    DL,
    DR,
    DF,
}

impl EdgePos {
    /// All twelve edge slots, in discriminant order.
    pub const ARRAY: [EdgePos; 12] = [
        EdgePos::UB,
        EdgePos::UL,
        EdgePos::UR,
        EdgePos::UF,
        EdgePos::LB,
        EdgePos::LF,
        EdgePos::RB,
        EdgePos::RF,
        EdgePos::DB,
        EdgePos::DL,
        EdgePos::DR,
        EdgePos::DF,
    ];
}

/// The flip state of an edge piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum EdgeFlip {
    /// The tracked color is on the slot's primary sticker.
    Oriented,
    /// The tracked color is on the slot's secondary sticker.
    Flipped,
}

impl EdgeFlip {
    /// Flip the orientation.
    pub fn flip(self) -> EdgeFlip {
        match self {
            EdgeFlip::Oriented => EdgeFlip::Flipped,
            EdgeFlip::Flipped => EdgeFlip::Oriented,
        }
    }
}

impl TryFrom<u8> for EdgeFlip {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(EdgeFlip::Oriented),
            1 => Ok(EdgeFlip::Flipped),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// The twist state of a corner piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum CornerTwist {
    /// The tracked color faces up or down.
    Oriented,
    /// Twisted clockwise from the oriented position.
    Clockwise,
    /// Twisted anticlockwise from the oriented position.
    AntiClockwise,
}

impl TryFrom<u8> for CornerTwist {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(CornerTwist::Oriented),
            1 => Ok(CornerTwist::Clockwise),
            2 => Ok(CornerTwist::AntiClockwise),
            _ => Err(TryFromIntToEnumError::OutOfBounds),
        }
    }
}

/// A full sticker-level cube state: nine row-major facelets per face.
///
/// This is the model the replay player and the pattern-derivation tooling
/// work against. It carries centers, so slice moves and whole-cube rotations
/// are meaningful here, unlike in the reduced cross model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    facelets: [[FaceColor; 9]; 6],
}

impl FaceletCube {
    /// The solved cube in the trainer's reference color scheme.
    pub const SOLVED: FaceletCube = FaceletCube {
        facelets: [
            [FaceColor::Yellow; 9],
            [FaceColor::White; 9],
            [FaceColor::Red; 9],
            [FaceColor::Orange; 9],
            [FaceColor::Green; 9],
            [FaceColor::Blue; 9],
        ],
    };

    /// The color currently on the given sticker of the given face.
    pub fn facelet(&self, face: Face, index: usize) -> FaceColor {
        self.facelets[face as usize][index]
    }

    /// Cycle four stickers: the color at each cell moves to the next cell in
    /// the list, and the last wraps around to the first.
    fn cycle(&mut self, cells: [(Face, usize); 4]) {
        let last = self.facelets[cells[3].0 as usize][cells[3].1];
        for i in (1..4).rev() {
            let (tf, ti) = cells[i];
            let (sf, si) = cells[i - 1];
            self.facelets[tf as usize][ti] = self.facelets[sf as usize][si];
        }
        let (tf, ti) = cells[0];
        self.facelets[tf as usize][ti] = last;
    }
}

impl std::fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |face: Face, r: usize| -> String {
            (0..3)
                .map(|c| self.facelet(face, r * 3 + c).initial())
                .collect()
        };
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::D, r))?;
        }
        Ok(())
    }
}
