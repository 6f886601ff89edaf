//! The white-cross solver: a bounded breadth-first search over the four
//! cross edges.
//!
//! Only the four cross pieces are tracked, each as an edge slot plus a flip
//! bit saying which side of the slot carries the cross color. Face turns are
//! position 4-cycles in this model; L and R are the two faces whose turns
//! flip the tracked side, a consequence of projecting orientation onto the
//! U/D/F/B sticker axis.

use super::moves::{BaseMove, CubeMove};
use super::{EdgeFlip, EdgePos, Face};
use crate::coord::Coordinate;
use crate::error::PlacementError;
use crate::moves::MoveSequence;
use log::debug;
use std::collections::VecDeque;

/// One tracked cross edge: where it sits and which side shows the cross color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossEdge {
    /// The edge slot the piece currently occupies.
    pub pos: EdgePos,
    /// Whether the cross color is on the slot's primary or secondary sticker.
    pub flip: EdgeFlip,
}

/// The four cross pieces, named by their side color's face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrossPiece {
    /// The white-green edge; belongs at DF.
    Front,
    /// The white-orange edge; belongs at DR.
    Right,
    /// The white-blue edge; belongs at DB.
    Back,
    /// The white-red edge; belongs at DL.
    Left,
}

/// A caller-owned, piece-by-piece assignment of the cross edges. The host UI
/// fills this in as the user marks stickers and hands it to [`solve_cross`]
/// once done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossPlacement {
    slots: [Option<CrossEdge>; 4],
}

impl CrossPlacement {
    /// An empty placement with no pieces assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or re-place) a piece.
    pub fn assign(&mut self, piece: CrossPiece, edge: CrossEdge) {
        self.slots[piece as usize] = Some(edge);
    }

    /// Remove a piece's assignment.
    pub fn clear(&mut self, piece: CrossPiece) {
        self.slots[piece as usize] = None;
    }

    /// How many of the four pieces are assigned.
    pub fn assigned(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Build the searchable state. All four pieces must be assigned, to
    /// pairwise distinct slots.
    pub fn state(&self) -> Result<CrossState, PlacementError> {
        let mut edges = [CrossEdge {
            pos: EdgePos::UB,
            flip: EdgeFlip::Oriented,
        }; 4];
        for (i, slot) in self.slots.iter().enumerate() {
            edges[i] = slot.ok_or(PlacementError::Incomplete {
                assigned: self.assigned(),
                required: 4,
            })?;
        }
        for i in 0..4 {
            for j in (i + 1)..4 {
                if edges[i].pos == edges[j].pos {
                    return Err(PlacementError::PositionCollision);
                }
            }
        }
        Ok(CrossState { edges })
    }
}

/// The positions and flips of the four cross pieces, in piece order
/// front, right, back, left. Piece slots stay pairwise distinct under move
/// application since every move permutes slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossState {
    edges: [CrossEdge; 4],
}

// The edge-slot 4-cycle of each clockwise face turn, indexed by Face.
const EDGE_CYCLES: [[EdgePos; 4]; 6] = [
    [EdgePos::UB, EdgePos::UR, EdgePos::UF, EdgePos::UL],
    [EdgePos::DF, EdgePos::DR, EdgePos::DB, EdgePos::DL],
    [EdgePos::UL, EdgePos::LF, EdgePos::DL, EdgePos::LB],
    [EdgePos::UR, EdgePos::RB, EdgePos::DR, EdgePos::RF],
    [EdgePos::UF, EdgePos::RF, EdgePos::DF, EdgePos::LF],
    [EdgePos::UB, EdgePos::LB, EdgePos::DB, EdgePos::RB],
];

impl CrossState {
    /// The solved cross: every piece home and unflipped.
    pub const SOLVED: CrossState = CrossState {
        edges: [
            CrossEdge {
                pos: EdgePos::DF,
                flip: EdgeFlip::Oriented,
            },
            CrossEdge {
                pos: EdgePos::DR,
                flip: EdgeFlip::Oriented,
            },
            CrossEdge {
                pos: EdgePos::DB,
                flip: EdgeFlip::Oriented,
            },
            CrossEdge {
                pos: EdgePos::DL,
                flip: EdgeFlip::Oriented,
            },
        ],
    };

    /// The current placement of one piece.
    pub fn edge(&self, piece: CrossPiece) -> CrossEdge {
        self.edges[piece as usize]
    }

    /// Apply an outer face turn the given number of quarter turns. A count of
    /// 3 is the anticlockwise turn, executed as three forward applications.
    pub fn make_move(self, face: Face, count: u8) -> CrossState {
        (0..count).fold(self, |s, _| s.face_turn(face))
    }

    /// Apply an algorithm of outer face turns. Returns `None` if the
    /// sequence contains a wide, slice or rotation move, which this reduced
    /// model cannot express.
    pub fn make_moves(self, mvs: &MoveSequence<CubeMove>) -> Option<CrossState> {
        mvs.0.iter().try_fold(self, |s, m| match m.base {
            BaseMove::Face(f) => Some(s.make_move(f, m.count)),
            _ => None,
        })
    }

    fn face_turn(self, face: Face) -> CrossState {
        let cycle = EDGE_CYCLES[face as usize];
        let flips = matches!(face, Face::L | Face::R);
        let mut edges = self.edges;
        for e in &mut edges {
            if let Some(i) = cycle.iter().position(|&p| p == e.pos) {
                e.pos = cycle[(i + 1) % 4];
                if flips {
                    e.flip = e.flip.flip();
                }
            }
        }
        CrossState { edges }
    }
}

/// Dense injective key for a cross state: four (slot, flip) pairs in base 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossCoord(u32);

impl Coordinate<CrossState> for CrossCoord {
    fn from_puzzle(puzzle: &CrossState) -> Self {
        CrossCoord(puzzle.edges.iter().fold(0, |acc, e| {
            acc * 24 + (e.pos as u32) * 2 + (e.flip == EdgeFlip::Flipped) as u32
        }))
    }

    fn count() -> usize {
        // 24^4. Slot collisions make some of these unreachable; a ranked
        // encoding could shrink the table 16x but a third of a megabyte per
        // search is nothing to worry about.
        331_776
    }

    fn repr(self) -> usize {
        self.0 as usize
    }
}

/// Limits on the breadth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Sequences longer than this are abandoned, not expanded.
    pub max_depth: usize,
    /// Hard ceiling on dequeued states before giving up.
    pub max_nodes: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        SearchBudget {
            max_depth: 8,
            max_nodes: 200_000,
        }
    }
}

// The twelve quarter-turn actions offered to the search, in expansion order.
const ACTIONS: [(Face, u8); 12] = [
    (Face::U, 1),
    (Face::U, 3),
    (Face::D, 1),
    (Face::D, 3),
    (Face::F, 1),
    (Face::F, 3),
    (Face::B, 1),
    (Face::B, 3),
    (Face::R, 1),
    (Face::R, 3),
    (Face::L, 1),
    (Face::L, 3),
];

impl CrossState {
    /// Search for a move sequence carrying this state to the solved cross,
    /// under the default budget. See [`solve_with_budget`](Self::solve_with_budget).
    pub fn solve(self) -> Option<MoveSequence<CubeMove>> {
        self.solve_with_budget(SearchBudget::default())
    }

    /// Breadth-first search over single face turns. The first sequence found
    /// is a shortest one within the offered actions; an already-solved state
    /// returns the empty sequence without searching. `None` means the budget
    /// ran out, an expected outcome rather than a fault.
    pub fn solve_with_budget(self, budget: SearchBudget) -> Option<MoveSequence<CubeMove>> {
        if self == CrossState::SOLVED {
            return Some(MoveSequence::empty());
        }

        let mut visited = vec![false; CrossCoord::count()];
        visited[CrossCoord::from_puzzle(&self).repr()] = true;

        // Nodes hold a parent link instead of a move list per queue entry;
        // the winning path is rebuilt at the end.
        let mut nodes: Vec<(CrossState, u8, Option<(usize, CubeMove)>)> = vec![(self, 0, None)];
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);
        let mut dequeued = 0usize;

        while let Some(idx) = queue.pop_front() {
            if dequeued >= budget.max_nodes {
                break;
            }
            dequeued += 1;

            let (state, depth, _) = nodes[idx];
            if depth as usize >= budget.max_depth {
                continue;
            }

            for (face, count) in ACTIONS {
                let next = state.make_move(face, count);
                let mv = CubeMove {
                    base: BaseMove::Face(face),
                    count,
                };

                if next == CrossState::SOLVED {
                    debug!(
                        "cross solved at depth {} after {dequeued} dequeues",
                        depth + 1
                    );
                    return Some(reconstruct(&nodes, idx, mv));
                }

                let key = CrossCoord::from_puzzle(&next).repr();
                if !visited[key] {
                    visited[key] = true;
                    nodes.push((next, depth + 1, Some((idx, mv))));
                    queue.push_back(nodes.len() - 1);
                }
            }
        }

        debug!("cross search gave up after {dequeued} dequeues");
        None
    }
}

fn reconstruct(
    nodes: &[(CrossState, u8, Option<(usize, CubeMove)>)],
    mut idx: usize,
    last: CubeMove,
) -> MoveSequence<CubeMove> {
    let mut path = vec![last];
    while let Some((parent, mv)) = nodes[idx].2 {
        path.push(mv);
        idx = parent;
    }
    path.reverse();
    MoveSequence(path)
}

/// Solve a user-entered cross placement. Incomplete or colliding input is
/// refused before any searching happens; a well-formed placement that
/// exhausts the search budget yields `Ok(None)`.
pub fn solve_cross(
    placement: &CrossPlacement,
) -> Result<Option<MoveSequence<CubeMove>>, PlacementError> {
    Ok(placement.state()?.solve())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::{FaceColor, FaceletCube};

    fn oriented(pos: EdgePos) -> CrossEdge {
        CrossEdge {
            pos,
            flip: EdgeFlip::Oriented,
        }
    }

    #[test]
    fn solved_state_returns_empty_sequence() {
        let solution = CrossState::SOLVED.solve().unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn incomplete_placement_is_refused() {
        let mut placement = CrossPlacement::new();
        placement.assign(CrossPiece::Front, oriented(EdgePos::UF));
        placement.assign(CrossPiece::Back, oriented(EdgePos::UB));
        assert_eq!(
            solve_cross(&placement),
            Err(PlacementError::Incomplete {
                assigned: 2,
                required: 4
            })
        );
    }

    #[test]
    fn colliding_placement_is_refused() {
        let mut placement = CrossPlacement::new();
        placement.assign(CrossPiece::Front, oriented(EdgePos::UF));
        placement.assign(CrossPiece::Right, oriented(EdgePos::UF));
        placement.assign(CrossPiece::Back, oriented(EdgePos::UB));
        placement.assign(CrossPiece::Left, oriented(EdgePos::UL));
        assert_eq!(solve_cross(&placement), Err(PlacementError::PositionCollision));
    }

    #[test]
    fn one_move_scramble_solves_in_one() {
        // A top-layer turn leaves the solved cross alone, so scramble with F.
        let scrambled = CrossState::SOLVED.make_move(Face::F, 1);
        assert_ne!(scrambled, CrossState::SOLVED);
        let solution = scrambled.solve().unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(scrambled.make_moves(&solution), Some(CrossState::SOLVED));
    }

    #[test]
    fn four_edges_on_top_solve_as_four_half_turns() {
        // The classic "all four placed on the top layer, cross color up"
        // teaching position.
        let mut placement = CrossPlacement::new();
        placement.assign(CrossPiece::Front, oriented(EdgePos::UF));
        placement.assign(CrossPiece::Right, oriented(EdgePos::UR));
        placement.assign(CrossPiece::Back, oriented(EdgePos::UB));
        placement.assign(CrossPiece::Left, oriented(EdgePos::UL));

        let state = placement.state().unwrap();
        let solution = solve_cross(&placement).unwrap().unwrap();
        assert_eq!(state.make_moves(&solution), Some(CrossState::SOLVED));
        let halves = solution.cancel();
        assert_eq!(halves.len(), 4);
        assert!(halves.0.iter().all(|m| m.count == 2));
    }

    #[test]
    fn exhausted_budget_is_a_normal_miss() {
        let scrambled = CrossState::SOLVED.make_move(Face::F, 1);
        let budget = SearchBudget {
            max_depth: 0,
            max_nodes: 10,
        };
        assert_eq!(scrambled.solve_with_budget(budget), None);
    }

    // Sticker pairs of the twelve edge slots, primary first, in EdgePos
    // order. Used to read the tracked cross state back out of a facelet cube.
    const EDGE_STICKERS: [((Face, usize), (Face, usize)); 12] = [
        ((Face::U, 1), (Face::B, 1)),
        ((Face::U, 3), (Face::L, 1)),
        ((Face::U, 5), (Face::R, 1)),
        ((Face::U, 7), (Face::F, 1)),
        ((Face::L, 3), (Face::B, 5)),
        ((Face::L, 5), (Face::F, 3)),
        ((Face::R, 5), (Face::B, 3)),
        ((Face::R, 3), (Face::F, 5)),
        ((Face::D, 7), (Face::B, 7)),
        ((Face::D, 3), (Face::L, 7)),
        ((Face::D, 5), (Face::R, 7)),
        ((Face::D, 1), (Face::F, 7)),
    ];

    fn project(cube: &FaceletCube) -> CrossState {
        let side_colors = [
            FaceColor::Green,
            FaceColor::Orange,
            FaceColor::Blue,
            FaceColor::Red,
        ];
        let edges = side_colors.map(|side| {
            for (slot, &((f1, i1), (f2, i2))) in EDGE_STICKERS.iter().enumerate() {
                let c1 = cube.facelet(f1, i1);
                let c2 = cube.facelet(f2, i2);
                if c1 == FaceColor::White && c2 == side {
                    return CrossEdge {
                        pos: EdgePos::ARRAY[slot],
                        flip: EdgeFlip::Oriented,
                    };
                }
                if c2 == FaceColor::White && c1 == side {
                    return CrossEdge {
                        pos: EdgePos::ARRAY[slot],
                        flip: EdgeFlip::Flipped,
                    };
                }
            }
            panic!("cross edge not found on cube");
        });
        CrossState { edges }
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn action() -> impl Strategy<Value = (Face, u8)> {
        (any::<Face>(), 1..=3u8)
    }

    proptest! {
        // Deep scrambles make the search visit a sizable slice of the state
        // space, so this one runs fewer cases than the default.
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn scrambles_solve_within_their_length(actions in vec(0..12usize, 0..8)) {
            let scrambled = actions
                .iter()
                .fold(CrossState::SOLVED, |s, &i| {
                    let (face, count) = ACTIONS[i];
                    s.make_move(face, count)
                });
            let solution = scrambled.solve().unwrap();
            assert!(solution.len() <= actions.len());
            assert_eq!(scrambled.make_moves(&solution), Some(CrossState::SOLVED));
        }
    }

    proptest! {
        #[test]
        fn reduced_model_tracks_the_facelet_cube(moves in vec(action(), 0..15)) {
            let mut cube = FaceletCube::SOLVED;
            let mut cross = CrossState::SOLVED;
            for (face, count) in moves {
                cube = cube.make_move(CubeMove {
                    base: BaseMove::Face(face),
                    count,
                });
                cross = cross.make_move(face, count);
                assert_eq!(project(&cube), cross);
            }
        }
    }
}
