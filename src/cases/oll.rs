//! OLL case matching: which last-layer orientation case does a marked
//! top-and-ring bitmap show, up to the four orientations of the cube.

use super::conjugated_solution;
use super::grid::{rotate_ring, rotate_top};
use crate::cube333::moves::CubeMove;
use crate::cube333::{Face, FaceletCube};
use crate::error::{CaseTableError, PatternError};
use crate::moves::MoveSequence;
use log::debug;
use serde::Deserialize;

// Top-face sticker indices in encoding order; the fixed center is omitted.
const TOP_STICKERS: [usize; 8] = [0, 1, 2, 3, 5, 6, 7, 8];

// The side sticker behind each ring slot, in slot order.
const RING_STICKERS: [(Face, usize); 12] = [
    (Face::F, 0),
    (Face::F, 1),
    (Face::F, 2),
    (Face::R, 2),
    (Face::R, 1),
    (Face::R, 0),
    (Face::L, 0),
    (Face::L, 1),
    (Face::L, 2),
    (Face::B, 2),
    (Face::B, 1),
    (Face::B, 0),
];

/// Which stickers show the top color: eight top-face bits (the center is
/// always lit and omitted) plus the twelve ring bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OllPattern {
    /// The top-face bitmap, row major with the center skipped.
    pub top: [bool; 8],
    /// The ring bitmap, in ring slot order.
    pub ring: [bool; 12],
}

impl OllPattern {
    /// The pattern seen after turning the cube the given number of quarter
    /// turns clockwise. Top block and ring rotate together.
    pub fn rotated(&self, turns: u8) -> OllPattern {
        OllPattern {
            top: rotate_top(self.top, turns),
            ring: rotate_ring(self.ring, turns),
        }
    }

    /// The pattern a cube shows immediately before `solution` orients its
    /// last layer: the inverted algorithm is applied to a solved cube and
    /// the stickers showing the top color are read off. Case tables are
    /// repaired against their own solutions this way.
    pub fn before_alg(solution: &MoveSequence<CubeMove>) -> OllPattern {
        let cube = FaceletCube::SOLVED.make_moves(&solution.clone().inverse());
        let top_color = Face::U.solved_color();
        OllPattern {
            top: TOP_STICKERS.map(|i| cube.facelet(Face::U, i) == top_color),
            ring: RING_STICKERS.map(|(f, i)| cube.facelet(f, i) == top_color),
        }
    }

    fn parse(top: &str, ring: &str) -> Result<OllPattern, PatternError> {
        Ok(OllPattern {
            top: parse_bits::<8>(top)?,
            ring: parse_bits::<12>(ring)?,
        })
    }
}

fn parse_bits<const N: usize>(s: &str) -> Result<[bool; N], PatternError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != N {
        return Err(PatternError::BadLength {
            got: chars.len(),
            expected: N,
        });
    }
    let mut bits = [false; N];
    for (i, ch) in chars.into_iter().enumerate() {
        bits[i] = match ch {
            '0' => false,
            '1' => true,
            other => return Err(PatternError::BadBit(other)),
        };
    }
    Ok(bits)
}

// The wire shape of one table record.
#[derive(Debug, Deserialize)]
struct OllRecord {
    id: String,
    #[serde(rename = "topPattern")]
    top_pattern: String,
    #[serde(rename = "ringPattern")]
    ring_pattern: String,
    solution: String,
}

/// One orientation case: identifier, reference pattern and algorithm.
#[derive(Debug, Clone)]
pub struct OllCase {
    /// Display identifier, e.g. "OLL 27".
    pub id: String,
    /// The pattern in the case's reference orientation.
    pub pattern: OllPattern,
    /// The orienting algorithm for the reference orientation.
    pub solution: MoveSequence<CubeMove>,
}

/// An immutable, validated OLL case table.
#[derive(Debug, Clone, Default)]
pub struct OllTable {
    cases: Vec<OllCase>,
}

impl OllTable {
    /// Build a table from already-validated cases.
    pub fn new(cases: Vec<OllCase>) -> Self {
        OllTable { cases }
    }

    /// Load and validate a JSON case table.
    pub fn from_json(json: &str) -> Result<Self, CaseTableError> {
        let records: Vec<OllRecord> = serde_json::from_str(json)?;
        let cases = records
            .into_iter()
            .map(|rec| {
                let pattern = OllPattern::parse(&rec.top_pattern, &rec.ring_pattern).map_err(
                    |source| CaseTableError::Pattern {
                        id: rec.id.clone(),
                        source,
                    },
                )?;
                let solution =
                    rec.solution
                        .parse()
                        .map_err(|source| CaseTableError::Notation {
                            id: rec.id.clone(),
                            source,
                        })?;
                Ok(OllCase {
                    id: rec.id,
                    pattern,
                    solution,
                })
            })
            .collect::<Result<Vec<_>, CaseTableError>>()?;
        Ok(OllTable::new(cases))
    }

    /// Number of cases in the table.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the table holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterate over the stored cases in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OllCase> {
        self.cases.iter()
    }

    /// Find the case whose pattern equals the observed one under some
    /// rotation. Cases are tried in table order and the first hit wins,
    /// together with the rotation that produced it.
    pub fn find_match(&self, observed: &OllPattern) -> Option<OllMatch<'_>> {
        for case in &self.cases {
            for turns in 0..4 {
                if case.pattern.rotated(turns) == *observed {
                    debug!("OLL match {} at rotation {turns}", case.id);
                    return Some(OllMatch {
                        case,
                        rotation: turns,
                    });
                }
            }
        }
        debug!("no OLL match");
        None
    }
}

/// A successful OLL lookup: the case plus how far the user's cube is turned
/// from the case's reference orientation, in clockwise quarter turns.
#[derive(Debug, Clone, Copy)]
pub struct OllMatch<'a> {
    /// The matched case.
    pub case: &'a OllCase,
    /// Clockwise quarter turns from the reference orientation, 0 to 3.
    pub rotation: u8,
}

impl OllMatch<'_> {
    /// The stored algorithm bracketed in whole-cube y rotations so it can be
    /// executed without reorienting the cube first.
    pub fn adjusted_solution(&self) -> MoveSequence<CubeMove> {
        conjugated_solution(&self.case.solution, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits<const N: usize>(s: &str) -> [bool; N] {
        parse_bits(s).unwrap()
    }

    // A symmetric cross-only case and an asymmetric one. Patterns are
    // synthetic but well formed.
    fn sample_table() -> OllTable {
        OllTable::new(vec![
            OllCase {
                id: "OLL 21".into(),
                pattern: OllPattern {
                    top: bits("01011010"),
                    ring: bits("101000000101"),
                },
                solution: "R U2 R' U' R U R' U' R U' R'".parse().unwrap(),
            },
            OllCase {
                id: "OLL 27".into(),
                pattern: OllPattern {
                    top: bits("01011011"),
                    ring: bits("100100000100"),
                },
                solution: "R U R' U R U2 R'".parse().unwrap(),
            },
        ])
    }

    #[test]
    fn exact_pattern_matches_without_rotation() {
        let table = sample_table();
        let observed = OllPattern {
            top: bits("01011011"),
            ring: bits("100100000100"),
        };
        let found = table.find_match(&observed).unwrap();
        assert_eq!(found.case.id, "OLL 27");
        assert_eq!(found.rotation, 0);
    }

    #[test]
    fn rotated_patterns_report_their_rotation() {
        let table = sample_table();
        let case_pattern = OllPattern {
            top: bits("01011011"),
            ring: bits("100100000100"),
        };
        for turns in 0..4 {
            let found = table.find_match(&case_pattern.rotated(turns)).unwrap();
            assert_eq!(found.case.id, "OLL 27", "rotation {turns}");
            assert_eq!(found.rotation, turns, "rotation {turns}");
        }
    }

    #[test]
    fn unknown_pattern_and_empty_table_miss() {
        let table = sample_table();
        let nothing_oriented = OllPattern {
            top: bits("00000000"),
            ring: bits("111111111111"),
        };
        assert!(table.find_match(&nothing_oriented).is_none());
        assert!(OllTable::default()
            .find_match(&nothing_oriented)
            .is_none());
    }

    #[test]
    fn adjusted_solution_brackets_in_y_rotations() {
        let table = sample_table();
        let case_pattern = table.iter().nth(1).unwrap().pattern;
        let found = table.find_match(&case_pattern.rotated(1)).unwrap();
        assert_eq!(
            found.adjusted_solution().to_string(),
            "y' R U R' U R U2 R' y"
        );
        let aligned = table.find_match(&case_pattern).unwrap();
        assert_eq!(aligned.adjusted_solution().to_string(), "R U R' U R U2 R'");
    }

    #[test]
    fn json_table_loads_and_validates() {
        let table = OllTable::from_json(
            r#"[{"id": "OLL 21",
                 "topPattern": "01011010",
                 "ringPattern": "101000000101",
                 "solution": "R U2 R' U' R U R' U' R U' R'"}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next().unwrap().solution.len(), 11);

        let short = OllTable::from_json(
            r#"[{"id": "bad", "topPattern": "0101", "ringPattern": "101000000101", "solution": "R"}]"#,
        );
        assert!(matches!(short, Err(CaseTableError::Pattern { .. })));

        let garbled = OllTable::from_json(
            r#"[{"id": "bad", "topPattern": "01011010", "ringPattern": "101000000101", "solution": "R Qx"}]"#,
        );
        assert!(matches!(garbled, Err(CaseTableError::Notation { .. })));
    }

    #[test]
    fn pattern_before_the_empty_alg_is_solved() {
        let derived = OllPattern::before_alg(&MoveSequence::empty());
        assert_eq!(derived.top, [true; 8]);
        assert_eq!(derived.ring, [false; 12]);
    }

    #[test]
    fn pattern_before_a_half_turn() {
        let derived = OllPattern::before_alg(&"F2".parse().unwrap());
        assert_eq!(derived.top, bits::<8>("11111000"));
        assert_eq!(derived.ring, [false; 12]);
    }

    #[test]
    fn pattern_before_a_single_turn() {
        let derived = OllPattern::before_alg(&"R".parse().unwrap());
        assert_eq!(derived.top, bits::<8>("11010110"));
        assert_eq!(derived.ring, bits::<12>("001000000000"));
    }
}
