//! Module for puzzle move generics and related functionality

use std::fmt;
use std::str::FromStr;

/// Enum for representing the cancellation of two moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves cancelled into one move.
    ///
    /// e.g. `R R` cancels into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    TwoMove(M, M),
}

/// A move, for use in writing expressions or algorithms. A term of this trait
/// is a power of a generator in some group presentation, and the relations the
/// generators satisfy drive sequence simplification.
///
/// Order relations (e.g. R4 is the identity on a 3x3x3) are encoded in the
/// `cancel` method and commutativity relations (e.g. R and L commute) in the
/// `commutes_with` method. These are all that `MoveSequence::cancel` assumes,
/// so any further relations will not be used when simplifying.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the
    /// invertibility conditions of a group, i.e. that `X X^{-1} = X^{-1} X = e`
    /// where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when
    /// adjacent. This relation is required to be transitive: if
    /// `A.commutes_with(B)` and `B.commutes_with(C)`, then `A.commutes_with(C)`
    /// must hold as well.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// It is assumed that group axioms hold when applying cancellations.
    ///
    /// ```rust
    /// use cfop_engine::moves::{Cancellation, Move};
    /// use cfop_engine::mv;
    ///
    /// assert!(mv!(R, 1).cancel(mv!(U, 3)) == Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 1)) == Cancellation::OneMove(mv!(R, 2)));
    /// assert!(mv!(R, 1).cancel(mv!(R, 3)) == Cancellation::NoMove);
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// An empty sequence.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another sequence to the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is
    /// composition, then `X o X^{-1} = X^{-1} o X = e` where `e` is the empty
    /// sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel an alg, merging or eliminating same-generator moves that can be
    /// brought together by swapping commuting neighbours.
    ///
    /// Each incoming move is checked against the reduced prefix from the back:
    /// it merges with the first move sharing its generator that it can reach
    /// by commuting past intermediate moves, and is kept as-is otherwise.
    pub fn cancel(mut self) -> Self {
        let mut reduced: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            let mut merged = false;

            for i in (0..reduced.len()).rev() {
                match reduced[i].clone().cancel(next_mv.clone()) {
                    Cancellation::NoMove => {
                        reduced.remove(i);
                        merged = true;
                        break;
                    }
                    Cancellation::OneMove(m) => {
                        reduced[i] = m;
                        merged = true;
                        break;
                    }
                    Cancellation::TwoMove(_, _) => {
                        if !next_mv.commutes_with(&reduced[i]) {
                            break;
                        }
                    }
                }
            }

            if !merged {
                reduced.push(next_mv);
            }
        }

        Self(reduced)
    }
}

impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
            first = false;
        }
        Ok(())
    }
}

impl<M: Move + FromStr> FromStr for MoveSequence<M> {
    type Err = M::Err;

    /// Parse a whitespace-separated algorithm. Blank stretches between tokens
    /// are skipped rather than treated as moves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(M::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
